#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use reportcard::{
    PipelineError, RecordingSurface, RenderData, RenderSummary, ReportCardBuilder,
    ReportCardRenderer, Size, Template,
};
use serde_json::Value;
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// The authoring canvas; a recording surface this wide paints at scale 1.
pub const CANVAS: Size = Size { width: 794.0, height: 1123.0 };

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Strings shown with the Helvetica faces, in paint order.
    pub fn texts(&self) -> Vec<String> {
        pdf_assertions::shown_text(&self.doc)
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t == needle)
    }

    pub fn check_mark_count(&self) -> usize {
        pdf_assertions::check_mark_count(&self.doc)
    }

    pub fn image_count(&self) -> usize {
        pdf_assertions::operator_count(&self.doc, "Do")
    }
}

/// A renderer that never touches the network or the filesystem.
pub fn offline_renderer() -> ReportCardRenderer {
    ReportCardBuilder::new()
        .with_image_source(Arc::new(reportcard::InMemoryResourceProvider::new()))
        .build()
        .expect("offline renderer")
}

pub async fn render_pdf(
    renderer: &ReportCardRenderer,
    template: &Value,
    data: Value,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let template = Template::from_value(template)?;
    let data = RenderData::from_value(data)?;
    let bytes = renderer.render_to_bytes(&template, &data).await?;
    GeneratedPdf::from_bytes(bytes)
}

/// Renders onto a recording surface of `size`.
pub async fn record_with(
    renderer: &ReportCardRenderer,
    size: Size,
    template: &Value,
    data: Value,
) -> Result<(RenderSummary, RecordingSurface), PipelineError> {
    let template = Template::from_value(template)?;
    let data = RenderData::from_value(data)?;
    let mut surface = RecordingSurface::new(size);
    let summary = renderer.render(&mut surface, &template, &data).await;
    Ok((summary, surface))
}

pub async fn record(template: &Value, data: Value) -> Result<RecordingSurface, PipelineError> {
    let (_, surface) = record_with(&offline_renderer(), CANVAS, template, data).await?;
    Ok(surface)
}
