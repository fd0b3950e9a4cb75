pub mod image_source;
pub mod resource;

pub use image_source::ImageSource;
pub use resource::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
