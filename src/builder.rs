// src/builder.rs
use crate::config::{PageFormat, RenderConfig};
use crate::error::PipelineError;
use crate::pipeline::ReportCardRenderer;
use reportcard_core::LayoutSettings;
use reportcard_resource::{AssetImageSource, FilesystemResourceProvider, HttpImageSource};
use reportcard_traits::{ImageSource, ResourceProvider};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// A builder for creating a [`ReportCardRenderer`].
#[derive(Debug, Default)]
pub struct ReportCardBuilder {
    config: RenderConfig,
    resource_provider: Option<Arc<dyn ResourceProvider>>,
    image_source: Option<Arc<dyn ImageSource>>,
}

impl ReportCardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing configuration instead of the defaults.
    pub fn from_config(config: RenderConfig) -> Self {
        Self { config, ..Self::default() }
    }

    pub fn with_page_format(mut self, format: PageFormat) -> Self {
        self.config.page_format = format;
        self
    }

    /// Sets the width of the canvas templates were authored against.
    pub fn with_reference_width(mut self, width: f32) -> Self {
        self.config.reference_width = width;
        self
    }

    pub fn with_public_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.public_root = root.into();
        self
    }

    pub fn with_image_timeout(mut self, timeout: Duration) -> Self {
        self.config.image_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Enables or disables fetching `http(s)://` image locations.
    pub fn with_http(mut self, enabled: bool) -> Self {
        self.config.http_enabled = enabled;
        self
    }

    pub fn with_layout_settings(mut self, layout: LayoutSettings) -> Self {
        self.config.layout = layout;
        self
    }

    /// Serves local image locations from `provider` instead of the public root.
    pub fn with_resource_provider(mut self, provider: Arc<dyn ResourceProvider>) -> Self {
        self.resource_provider = Some(provider);
        self
    }

    /// Replaces image acquisition entirely; local and remote routing is skipped.
    pub fn with_image_source(mut self, source: Arc<dyn ImageSource>) -> Self {
        self.image_source = Some(source);
        self
    }

    /// Validates the configuration and creates the renderer.
    pub fn build(self) -> Result<ReportCardRenderer, PipelineError> {
        let config = self.config;

        if config.image_timeout.is_zero() {
            return Err(PipelineError::Config(
                "image timeout must be greater than zero".to_string(),
            ));
        }
        if !(config.reference_width.is_finite() && config.reference_width > 0.0) {
            return Err(PipelineError::Config(format!(
                "reference width must be positive, got {}",
                config.reference_width
            )));
        }
        let page = config.page_format.size();
        if !(page.width.is_finite() && page.height.is_finite() && page.width > 0.0 && page.height > 0.0) {
            return Err(PipelineError::Config(format!(
                "page size must be positive, got {}x{}",
                page.width, page.height
            )));
        }

        let source: Arc<dyn ImageSource> = match self.image_source {
            Some(source) => source,
            None => {
                let local: Arc<dyn ResourceProvider> = match self.resource_provider {
                    Some(provider) => provider,
                    None => Arc::new(FilesystemResourceProvider::new(&config.public_root)),
                };
                let remote: Option<Arc<dyn ImageSource>> = if config.http_enabled {
                    Some(Arc::new(HttpImageSource::new(
                        config.image_timeout,
                        &config.user_agent,
                    )?))
                } else {
                    None
                };
                Arc::new(AssetImageSource::new(local, remote))
            }
        };

        log::debug!(
            "Building renderer: page {}x{} pt, reference width {}, image source {}",
            page.width,
            page.height,
            config.reference_width,
            source.name()
        );
        Ok(ReportCardRenderer::new(config, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_build() {
        let renderer = ReportCardBuilder::new().with_http(false).build().unwrap();
        assert_eq!(renderer.config().page_format, PageFormat::A4);
        assert_eq!(renderer.config().reference_width, 794.0);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let result = ReportCardBuilder::new().with_image_timeout(Duration::ZERO).build();
        assert!(matches!(result, Err(PipelineError::Config(_))));
    }

    #[test]
    fn non_positive_reference_width_is_rejected() {
        for width in [0.0, -10.0, f32::NAN] {
            let result = ReportCardBuilder::new().with_http(false).with_reference_width(width).build();
            assert!(matches!(result, Err(PipelineError::Config(_))), "width {}", width);
        }
    }

    #[test]
    fn invalid_page_size_is_rejected() {
        let result = ReportCardBuilder::new()
            .with_http(false)
            .with_page_format(PageFormat::Custom { width: 0.0, height: 800.0 })
            .build();
        assert!(matches!(result, Err(PipelineError::Config(_))));
    }
}
