use crate::images::ImageCache;
use crate::scaler::Scaler;
use crate::settings::LayoutSettings;
use reportcard_record::RenderData;

/// Read-only inputs shared by every renderer during one paint pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub data: &'a RenderData,
    pub images: &'a ImageCache,
    pub settings: &'a LayoutSettings,
    pub scaler: Scaler,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        data: &'a RenderData,
        images: &'a ImageCache,
        settings: &'a LayoutSettings,
        scaler: Scaler,
    ) -> Self {
        Self { data, images, settings, scaler }
    }

    /// Default body font size in page units.
    pub fn font_size(&self) -> f32 {
        self.scaler.length(self.settings.font_size)
    }

    pub fn table_font_size(&self) -> f32 {
        self.scaler.length(self.settings.table_font_size)
    }

    pub fn caption_font_size(&self) -> f32 {
        self.scaler.length(self.settings.caption_font_size)
    }

    pub fn table_header_height(&self) -> f32 {
        self.scaler.length(self.settings.table_header_height)
    }
}
