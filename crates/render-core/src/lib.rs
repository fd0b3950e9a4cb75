//! Core rendering abstractions for report-card painting.
//!
//! This crate provides the fundamental traits and types used by output backends:
//! - `Surface` trait, the ordered sink every renderer paints into
//! - `RecordingSurface`, which captures draw commands for inspection
//! - Base-14 Helvetica metrics for measuring and wrapping text
//! - Error types for rendering operations

mod error;
pub mod metrics;
mod recording;
mod surface;
pub mod utils;

pub use error::RenderError;
pub use metrics::{text_width, wrap_text};
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{FontFace, LineDash, RasterImage, Stroke, Surface, TextRun};
