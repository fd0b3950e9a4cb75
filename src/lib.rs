//! # reportcard
//!
//! Renders academic report cards from a positioned JSON template and a
//! student's record.
//!
//! A render call has two phases:
//! 1. every image the template needs is fetched concurrently and decoded
//!    ([`prefetch_images`]), each fetch bounded by a timeout
//! 2. the template is painted element by element, in array order, onto a
//!    single page
//!
//! Missing data never fails a render. Unreachable images paint an
//! "Image Error" box, unmatched table cells show `-`, and unknown
//! element types are skipped.
//!
//! # Example
//!
//! ```ignore
//! use reportcard::{RenderData, ReportCardBuilder, Template};
//!
//! let renderer = ReportCardBuilder::new()
//!     .with_public_root("./public")
//!     .build()?;
//! let template = Template::from_json(&template_json)?;
//! let data = RenderData::from_json(&data_json)?;
//! let pdf = renderer.render_to_bytes(&template, &data).await?;
//! ```

mod builder;
pub mod config;
pub mod error;
mod pipeline;

pub use builder::ReportCardBuilder;
pub use config::{PageFormat, RenderConfig};
pub use error::PipelineError;
pub use pipeline::{ReportCardRenderer, decode_image, prefetch_images};

pub use reportcard_core::{
    ImageCache, LayoutSettings, RecordingSurface, RenderContext, RenderData, RenderSummary, Scaler,
    Surface, Template, render,
};
pub use reportcard_render_lopdf::PdfSurface;
pub use reportcard_resource::{
    AssetImageSource, FilesystemResourceProvider, HttpImageSource, InMemoryResourceProvider,
};
pub use reportcard_traits::{ImageSource, ResourceError, ResourceProvider};
pub use reportcard_types::{Color, Point, Rect, Size};
pub use reportcard_core::render::{DrawCommand, FontFace, LineDash, RasterImage, Stroke, TextRun};
