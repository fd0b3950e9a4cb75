//! Filesystem-based provider for the public assets directory.
//!
//! Template images that are not URLs (`/uploads/logo.png`,
//! `uploads/photo.jpg`) are files below the application's public root.
//!
//! # Security
//!
//! The provider validates that all resolved paths remain within the root
//! to prevent directory traversal (e.g., `../../../etc/passwd`).

use reportcard_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// A resource provider that reads files relative to a public assets root.
#[derive(Debug)]
pub struct FilesystemResourceProvider {
    base_path: PathBuf,
    /// Canonicalized base path for security checks
    canonical_base: Option<PathBuf>,
}

impl FilesystemResourceProvider {
    /// Creates a provider rooted at `base_path`.
    ///
    /// The root is canonicalized when it exists so that symlinked assets can
    /// be checked against it.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base = base_path.as_ref().to_path_buf();
        let canonical = base.canonicalize().ok();
        Self {
            base_path: base,
            canonical_base: canonical,
        }
    }

    /// Returns the base path for this provider.
    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Resolves and validates a resource path relative to the base path.
    ///
    /// Returns `None` if the path would escape the base directory.
    fn resolve_path_safe(&self, path: &str) -> Option<PathBuf> {
        if Path::new(path).is_absolute() {
            return None;
        }

        let full_path = self.base_path.join(path);

        if let Ok(canonical) = full_path.canonicalize()
            && let Some(ref base) = self.canonical_base
        {
            return canonical.starts_with(base).then_some(canonical);
        }

        // The file may not exist yet; refuse any `..` outright.
        if Path::new(path)
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return None;
        }

        Some(full_path)
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let full_path = self
            .resolve_path_safe(path)
            .ok_or_else(|| ResourceError::NotFound(format!("{} (path traversal blocked)", path)))?;

        std::fs::read(&full_path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(path.to_string())
            } else {
                ResourceError::LoadFailed {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve_path_safe(path)
            .map(|p| p.is_file())
            .unwrap_or(false)
    }

    fn base_path(&self) -> Option<&str> {
        self.base_path.to_str()
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_filesystem_provider_load_existing_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("logo.png"), b"PNGDATA").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        let data = provider.load("logo.png").unwrap();
        assert_eq!(&*data, b"PNGDATA");
        assert!(provider.exists("logo.png"));
    }

    #[test]
    fn test_filesystem_provider_not_found() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        let result = provider.load("uploads/missing.png");
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
        assert!(!provider.exists("uploads/missing.png"));
    }

    #[test]
    fn test_filesystem_provider_allows_nested_paths() {
        let dir = tempdir().unwrap();
        let nested_dir = dir.path().join("uploads").join("students");
        fs::create_dir_all(&nested_dir).unwrap();
        fs::write(nested_dir.join("ada.jpg"), b"JPEG").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        assert_eq!(&*provider.load("uploads/students/ada.jpg").unwrap(), b"JPEG");
    }

    #[test]
    fn test_filesystem_provider_blocks_path_traversal() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        assert!(provider.load("../../../etc/passwd").is_err());
        assert!(!provider.exists("foo/../../../bar"));
        assert!(!provider.exists(".."));
    }

    #[test]
    fn test_filesystem_provider_blocks_absolute_paths() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        assert!(provider.load("/etc/passwd").is_err());
        assert!(!provider.exists("/etc/passwd"));
    }

    #[test]
    fn test_filesystem_provider_missing_root_is_not_fatal() {
        let provider = FilesystemResourceProvider::new("/definitely/not/a/real/root");
        assert!(matches!(
            provider.load("logo.png"),
            Err(ResourceError::NotFound(_))
        ));
    }
}
