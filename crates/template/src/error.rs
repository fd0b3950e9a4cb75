use thiserror::Error;

/// Failures that make a template unusable as a whole.
///
/// Problems inside a single element never surface here; the decoder skips
/// or defaults them instead.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Template structure error: {0}")]
    Structure(String),
}
