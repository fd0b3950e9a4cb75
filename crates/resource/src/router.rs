//! Scheme-based routing between remote and local image sources.

use async_trait::async_trait;
use reportcard_traits::{ImageSource, ResourceError, ResourceProvider, SharedResourceData};
use std::sync::Arc;

/// True for `http://` and `https://` locations (case-insensitive scheme).
pub fn is_remote_location(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// The image source used by a render: URLs go to the remote source, every
/// other location is read from the public assets provider with any leading
/// `/` stripped.
#[derive(Debug, Clone)]
pub struct AssetImageSource {
    local: Arc<dyn ResourceProvider>,
    remote: Option<Arc<dyn ImageSource>>,
}

impl AssetImageSource {
    pub fn new(local: Arc<dyn ResourceProvider>, remote: Option<Arc<dyn ImageSource>>) -> Self {
        Self { local, remote }
    }

    /// A source that only reads local assets; URLs fail with `LoadFailed`.
    pub fn local_only(local: Arc<dyn ResourceProvider>) -> Self {
        Self::new(local, None)
    }
}

#[async_trait]
impl ImageSource for AssetImageSource {
    async fn fetch(&self, location: &str) -> Result<SharedResourceData, ResourceError> {
        let location = location.trim();
        if is_remote_location(location) {
            return match &self.remote {
                Some(remote) => remote.fetch(location).await,
                None => Err(ResourceError::LoadFailed {
                    path: location.to_string(),
                    message: "remote image fetching is disabled".to_string(),
                }),
            };
        }

        let relative = location.trim_start_matches('/').to_string();
        let local = Arc::clone(&self.local);
        tokio::task::spawn_blocking(move || local.load(&relative))
            .await
            .map_err(|e| ResourceError::LoadFailed {
                path: location.to_string(),
                message: e.to_string(),
            })?
    }

    fn name(&self) -> &'static str {
        "AssetImageSource"
    }
}
