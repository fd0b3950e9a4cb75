// src/pipeline.rs
//! Image prefetch followed by a synchronous paint pass.

use crate::config::RenderConfig;
use crate::error::PipelineError;
use futures::future::join_all;
use itertools::Itertools;
use reportcard_core::fields::image_location;
use reportcard_core::render::RasterImage;
use reportcard_core::{
    ImageCache, RenderContext, RenderData, RenderSummary, Scaler, Surface, Template, render,
};
use reportcard_render_lopdf::PdfSurface;
use reportcard_traits::ImageSource;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Fetches and decodes every distinct image location the template needs
/// from `data`, concurrently, each bounded by `timeout`.
///
/// Never fails: each location ends up either ready or recorded as failed.
pub async fn prefetch_images(
    template: &Template,
    data: &RenderData,
    source: &dyn ImageSource,
    timeout: Duration,
) -> ImageCache {
    let locations: Vec<&str> = template
        .images()
        .filter_map(|spec| image_location(&spec.field, data))
        .filter(|location| !location.is_empty())
        .unique()
        .collect();

    let fetches = locations.into_iter().map(|location| async move {
        let outcome = match tokio::time::timeout(timeout, fetch_and_decode(source, location)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(format!("timed out after {} ms", timeout.as_millis())),
        };
        (location, outcome)
    });

    let mut cache = ImageCache::new();
    for (location, outcome) in join_all(fetches).await {
        match outcome {
            Ok(image) => cache.insert_ready(location, image),
            Err(reason) => {
                log::warn!("Image '{}' unavailable: {}", location, reason);
                cache.insert_failed(location, reason);
            }
        }
    }
    cache
}

async fn fetch_and_decode(source: &dyn ImageSource, location: &str) -> Result<RasterImage, String> {
    let bytes = source.fetch(location).await.map_err(|e| e.to_string())?;
    tokio::task::spawn_blocking(move || decode_image(&bytes))
        .await
        .map_err(|e| format!("decode task failed: {}", e))?
}

/// Decodes PNG, JPEG or GIF bytes into packed RGB.
pub fn decode_image(bytes: &[u8]) -> Result<RasterImage, String> {
    let decoded = image::load_from_memory(bytes).map_err(|e| e.to_string())?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(RasterImage::new(width, height, rgb.into_raw()))
}

/// Renders report cards for one configuration.
///
/// Cheap to clone; every render call owns its own surface and image cache,
/// so calls can run side by side.
#[derive(Clone)]
pub struct ReportCardRenderer {
    config: RenderConfig,
    source: Arc<dyn ImageSource>,
}

impl fmt::Debug for ReportCardRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportCardRenderer")
            .field("config", &self.config)
            .field("source", &self.source.name())
            .finish()
    }
}

impl ReportCardRenderer {
    pub(crate) fn new(config: RenderConfig, source: Arc<dyn ImageSource>) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Fetches the images `template` needs for `data`.
    pub async fn prefetch(&self, template: &Template, data: &RenderData) -> ImageCache {
        prefetch_images(template, data, self.source.as_ref(), self.config.image_timeout).await
    }

    /// Paints onto `surface` using already-fetched images. Synchronous.
    pub fn paint(
        &self,
        surface: &mut dyn Surface,
        template: &Template,
        data: &RenderData,
        images: &ImageCache,
    ) -> RenderSummary {
        let scaler = Scaler::new(surface.page_size().width, self.config.reference_width);
        let ctx = RenderContext::new(data, images, &self.config.layout, scaler);
        render(surface, template, &ctx)
    }

    /// Prefetches images, then paints the template onto a caller-owned surface.
    pub async fn render(
        &self,
        surface: &mut dyn Surface,
        template: &Template,
        data: &RenderData,
    ) -> RenderSummary {
        let images = self.prefetch(template, data).await;
        self.paint(surface, template, data, &images)
    }

    /// Renders one report card to a finished single-page PDF.
    pub async fn render_to_bytes(
        &self,
        template: &Template,
        data: &RenderData,
    ) -> Result<Vec<u8>, PipelineError> {
        let started = Instant::now();
        let images = self.prefetch(template, data).await;

        let mut surface = PdfSurface::new(self.config.page_format)?;
        let summary = self.paint(&mut surface, template, data, &images);
        let bytes = surface.finish()?;

        log::info!(
            "Rendered {} elements for '{}' in {:?} ({} images, {} fallbacks, {} bytes)",
            summary.elements,
            data.student_name().unwrap_or("<unnamed>"),
            started.elapsed(),
            images.len(),
            summary.image_fallbacks,
            bytes.len()
        );
        Ok(bytes)
    }

    /// Parses both documents from JSON text and renders them to PDF.
    pub async fn render_json(&self, template: &str, data: &str) -> Result<Vec<u8>, PipelineError> {
        let template = Template::from_json(template)?;
        let data = RenderData::from_json(data)?;
        self.render_to_bytes(&template, &data).await
    }

    /// Renders one PDF per record against the same template, concurrently.
    /// Results come back in input order.
    pub async fn render_many(
        &self,
        template: &Template,
        records: &[RenderData],
    ) -> Vec<Result<Vec<u8>, PipelineError>> {
        log::info!("Rendering {} report cards", records.len());
        join_all(records.iter().map(|data| self.render_to_bytes(template, data))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reportcard_traits::InMemoryResourceProvider;
    use serde_json::json;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let buffer = image::RgbImage::from_pixel(width, height, image::Rgb([10, 200, 30]));
        let mut out = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(buffer)
            .write_to(&mut out, image::ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    fn logo_template() -> Template {
        Template::from_value(&json!({ "elements": [
            { "type": "image", "x": 0, "y": 0, "width": 50, "height": 50, "metadata": { "field": "school_logo" } },
            { "type": "image", "x": 60, "y": 0, "width": 50, "height": 50, "metadata": { "field": "school_logo" } },
            { "type": "image", "x": 120, "y": 0, "width": 50, "height": 50, "metadata": { "field": "student_photo" } }
        ]}))
        .unwrap()
    }

    #[test]
    fn decodes_png_to_rgb() {
        let image = decode_image(&png_bytes(4, 3)).unwrap();
        assert_eq!((image.width, image.height), (4, 3));
        assert!(image.is_valid());
        assert_eq!(&image.rgb[..3], &[10, 200, 30]);
    }

    #[test]
    fn garbage_bytes_do_not_decode() {
        assert!(decode_image(b"not an image").is_err());
    }

    #[tokio::test]
    async fn prefetch_dedupes_and_records_failures() {
        let source = InMemoryResourceProvider::new()
            .with("logo.png", png_bytes(2, 2))
            .unwrap();
        let data = RenderData::from_value(json!({
            "school": { "logo": "logo.png" },
            "student": { "user": { "image": "missing.png" } }
        }))
        .unwrap();

        let cache = prefetch_images(&logo_template(), &data, &source, Duration::from_secs(1)).await;
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.failures(), 1);
    }

    #[tokio::test]
    async fn prefetch_with_no_locations_is_empty() {
        let source = InMemoryResourceProvider::new();
        let cache =
            prefetch_images(&logo_template(), &RenderData::default(), &source, Duration::from_secs(1)).await;
        assert!(cache.is_empty());
    }
}
