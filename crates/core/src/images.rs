//! Decoded images keyed by the location they were fetched from.

use reportcard_render_core::RasterImage;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum CachedImage {
    Ready(Arc<RasterImage>),
    /// The fetch or decode failed; the reason is kept for logging.
    Failed(String),
}

/// The outcome of every image fetch made before painting.
#[derive(Debug, Clone, Default)]
pub struct ImageCache {
    entries: HashMap<String, CachedImage>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_ready(&mut self, location: impl Into<String>, image: RasterImage) {
        self.entries
            .insert(location.into(), CachedImage::Ready(Arc::new(image)));
    }

    pub fn insert_failed(&mut self, location: impl Into<String>, reason: impl Into<String>) {
        self.entries
            .insert(location.into(), CachedImage::Failed(reason.into()));
    }

    pub fn get(&self, location: &str) -> Option<&CachedImage> {
        self.entries.get(location)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn failures(&self) -> usize {
        self.entries
            .values()
            .filter(|entry| matches!(entry, CachedImage::Failed(_)))
            .count()
    }
}
