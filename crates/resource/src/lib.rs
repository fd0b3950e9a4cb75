//! Image sources for the report-card renderer.
//!
//! ## Available Sources
//!
//! - [`FilesystemResourceProvider`]: reads assets below the public assets root
//! - [`HttpImageSource`]: fetches `http://` and `https://` URLs with reqwest
//! - [`AssetImageSource`]: routes a location to one of the two by its scheme
//!
//! ## Re-exports
//!
//! For convenience, we also re-export the in-memory provider from reportcard-traits:
//! - [`InMemoryResourceProvider`]: Pre-populated in-memory storage

mod filesystem;
mod http;
mod router;

pub use filesystem::FilesystemResourceProvider;
pub use http::HttpImageSource;
pub use router::{AssetImageSource, is_remote_location};

pub use reportcard_traits::InMemoryResourceProvider;
