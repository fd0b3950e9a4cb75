//! The asynchronous seam through which image bytes enter a render.
//!
//! Image acquisition is the only suspending operation in the renderer, so it
//! sits behind its own trait. Everything downstream of it is synchronous.

use crate::resource::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;

/// Fetches the raw bytes of an image from a URL or a local asset path.
///
/// Implementations must not panic on bad input; every failure is reported as
/// a [`ResourceError`] so the caller can paint a fallback instead.
#[async_trait]
pub trait ImageSource: Send + Sync + Debug {
    async fn fetch(&self, location: &str) -> Result<SharedResourceData, ResourceError>;

    /// Returns a human-readable name for this source (for logging/debugging).
    fn name(&self) -> &'static str;
}

#[async_trait]
impl<T: ImageSource + ?Sized> ImageSource for Arc<T> {
    async fn fetch(&self, location: &str) -> Result<SharedResourceData, ResourceError> {
        (**self).fetch(location).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// In-memory stores double as image sources so tests and embedders can
/// serve canned bytes without a network or filesystem.
#[async_trait]
impl ImageSource for InMemoryResourceProvider {
    async fn fetch(&self, location: &str) -> Result<SharedResourceData, ResourceError> {
        self.load(location)
    }

    fn name(&self) -> &'static str {
        ResourceProvider::name(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_provider_serves_fetches() {
        let provider = InMemoryResourceProvider::new()
            .with("https://cdn.example.com/logo.png", vec![1, 2, 3])
            .unwrap();
        let data = provider.fetch("https://cdn.example.com/logo.png").await.unwrap();
        assert_eq!(&*data, &[1, 2, 3]);
        assert!(provider.fetch("https://cdn.example.com/other.png").await.is_err());
    }

    #[tokio::test]
    async fn arc_wrapped_sources_delegate() {
        let provider: Arc<dyn ImageSource> = Arc::new(
            InMemoryResourceProvider::new()
                .with("a.png", vec![9])
                .unwrap(),
        );
        assert_eq!(&*provider.fetch("a.png").await.unwrap(), &[9]);
        assert_eq!(provider.name(), "InMemoryResourceProvider");
    }
}
