use super::text::draw_centered_line;
use crate::context::RenderContext;
use crate::fields::image_location;
use crate::images::CachedImage;
use reportcard_render_core::{FontFace, Stroke, Surface};
use reportcard_template::ImageSpec;
use reportcard_types::Rect;

const ERROR_CAPTION: &str = "Image Error";

/// What an image element ended up painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOutcome {
    Drawn,
    /// The location resolved but no usable image was available.
    Failed,
    Placeholder,
    /// Nothing to paint: no location and not a placeholder, or a zero-size frame.
    Skipped,
}

/// Paints the image bound to `spec.field`, fitted into `frame` without
/// distortion, or the appropriate fallback box.
pub fn draw_image(
    surface: &mut dyn Surface,
    frame: Rect,
    spec: &ImageSpec,
    ctx: &RenderContext<'_>,
) -> ImageOutcome {
    if frame.is_degenerate() {
        return ImageOutcome::Skipped;
    }

    let Some(location) = image_location(&spec.field, ctx.data).filter(|l| !l.is_empty()) else {
        if spec.is_placeholder {
            caption_box(
                surface,
                frame,
                &spec.field.placeholder_caption(),
                Stroke::dashed(ctx.settings.border_width, ctx.settings.muted_color.clone()),
                ctx,
            );
            return ImageOutcome::Placeholder;
        }
        return ImageOutcome::Skipped;
    };

    let failure = match ctx.images.get(location) {
        Some(CachedImage::Ready(image)) => match frame.contain(image.size()) {
            Some(fitted) => {
                surface.image(image, fitted);
                return ImageOutcome::Drawn;
            }
            None => "image has no pixels".to_string(),
        },
        Some(CachedImage::Failed(reason)) => reason.clone(),
        None => "image was not fetched".to_string(),
    };

    log::warn!("Drawing error box for {} ({}): {}", spec.field, location, failure);
    caption_box(
        surface,
        frame,
        ERROR_CAPTION,
        Stroke::solid(ctx.settings.border_width, ctx.settings.muted_color.clone()),
        ctx,
    );
    ImageOutcome::Failed
}

fn caption_box(
    surface: &mut dyn Surface,
    frame: Rect,
    caption: &str,
    stroke: Stroke,
    ctx: &RenderContext<'_>,
) {
    surface.stroke_rect(frame, &stroke);
    draw_centered_line(
        surface,
        frame,
        caption,
        FontFace::Regular,
        ctx.caption_font_size(),
        &ctx.settings.muted_color,
    );
}
