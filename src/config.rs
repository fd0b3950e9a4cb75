// src/config.rs
use reportcard_core::LayoutSettings;
use std::path::PathBuf;
use std::time::Duration;

pub use reportcard_core::scaler::REFERENCE_WIDTH;
pub use reportcard_render_lopdf::PageFormat;

pub const DEFAULT_IMAGE_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_PUBLIC_ROOT: &str = "./public";

/// Settings for a [`ReportCardRenderer`](crate::ReportCardRenderer).
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub page_format: PageFormat,
    /// Width of the authoring canvas, in template units.
    pub reference_width: f32,
    /// Root directory for image locations that are not `http(s)://` URLs.
    pub public_root: PathBuf,
    /// Upper bound for fetching and decoding one image.
    pub image_timeout: Duration,
    pub user_agent: String,
    /// When false, remote image locations paint the error box.
    pub http_enabled: bool,
    pub layout: LayoutSettings,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            page_format: PageFormat::A4,
            reference_width: REFERENCE_WIDTH,
            public_root: PathBuf::from(DEFAULT_PUBLIC_ROOT),
            image_timeout: DEFAULT_IMAGE_TIMEOUT,
            user_agent: concat!("reportcard/", env!("CARGO_PKG_VERSION")).to_string(),
            http_enabled: true,
            layout: LayoutSettings::default(),
        }
    }
}
