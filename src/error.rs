// src/error.rs
//! The top-level error type for report-card rendering.

use reportcard_core::render::RenderError;
use reportcard_core::template::TemplateError;
use reportcard_traits::ResourceError;
use thiserror::Error;

/// Everything a render call can fail with.
///
/// Per-element problems (missing images, unmatched fields) never show up
/// here; they are painted as fallbacks instead.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),
}
