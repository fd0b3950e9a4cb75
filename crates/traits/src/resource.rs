//! ResourceProvider trait for abstracting local asset loading.
//!
//! Images referenced by a template without an HTTP scheme live under the
//! application's public assets directory. This trait lets the renderer read
//! them without being tied to a particular filesystem layout.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Error type for asset loading operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("Request for '{url}' failed with HTTP {status}")]
    Http { url: String, status: u16 },

    #[error("Timed out after {millis} ms loading '{location}'")]
    Timeout { location: String, millis: u128 },

    #[error("Invalid resource format: {0}")]
    InvalidFormat(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

/// Shared resource data type (reference-counted bytes).
pub type SharedResourceData = Arc<Vec<u8>>;

/// A synchronous, local source of asset bytes.
///
/// # Implementations
///
/// - `FilesystemResourceProvider` (reportcard-resource): reads from the public assets root
/// - [`InMemoryResourceProvider`]: pre-populated memory, used by tests and embedders
pub trait ResourceProvider: Send + Sync + Debug {
    /// Load a resource by its path relative to the provider's root.
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError>;

    /// Check if a resource exists.
    fn exists(&self, path: &str) -> bool;

    /// Get the base path for resolving relative resources.
    ///
    /// Returns `None` if the provider doesn't use path-based resolution.
    fn base_path(&self) -> Option<&str> {
        None
    }

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An in-memory resource provider.
///
/// Resources must be added before rendering starts.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    resources: RwLock<HashMap<String, SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource to the in-memory store.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, path: impl Into<String>, data: Vec<u8>) -> Result<(), ResourceError> {
        let path_string = path.into();
        let mut resources = self
            .resources
            .write()
            .map_err(|_| ResourceError::LoadFailed {
                path: path_string.clone(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources.insert(path_string, Arc::new(data));
        Ok(())
    }

    /// Builder-style variant of [`add`](Self::add) for test fixtures.
    pub fn with(self, path: impl Into<String>, data: Vec<u8>) -> Result<Self, ResourceError> {
        self.add(path, data)?;
        Ok(self)
    }

    /// Get the number of resources in the store.
    ///
    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.resources.read().map(|r| r.len()).unwrap_or(0)
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let resources = self
            .resources
            .read()
            .map_err(|_| ResourceError::LoadFailed {
                path: path.to_string(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources
            .get(path)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }

    fn exists(&self, path: &str) -> bool {
        self.resources
            .read()
            .map(|r| r.contains_key(path))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_provider_add_and_load() {
        let provider = InMemoryResourceProvider::new();
        provider.add("logos/school.png", b"PNG".to_vec()).unwrap();

        let data = provider.load("logos/school.png").unwrap();
        assert_eq!(&*data, b"PNG");
        assert!(provider.exists("logos/school.png"));
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn test_in_memory_provider_not_found() {
        let provider = InMemoryResourceProvider::new();
        let result = provider.load("missing.png");
        assert_eq!(result, Err(ResourceError::NotFound("missing.png".to_string())));
        assert!(provider.is_empty());
    }

    #[test]
    fn test_in_memory_provider_overwrite() {
        let provider = InMemoryResourceProvider::new()
            .with("a.png", b"first".to_vec())
            .unwrap()
            .with("a.png", b"second".to_vec())
            .unwrap();
        assert_eq!(&*provider.load("a.png").unwrap(), b"second");
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn test_resource_error_display() {
        let err = ResourceError::Http {
            url: "https://cdn.example.com/a.png".to_string(),
            status: 404,
        };
        assert!(err.to_string().contains("404"));

        let err = ResourceError::Timeout {
            location: "https://slow.example.com/a.png".to_string(),
            millis: 1500,
        };
        assert!(err.to_string().contains("1500 ms"));
    }

    #[test]
    fn test_resource_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let resource_err: ResourceError = io_err.into();
        assert!(matches!(resource_err, ResourceError::Io(_)));
        assert!(resource_err.to_string().contains("file not found"));
    }
}
