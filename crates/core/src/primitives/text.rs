use crate::context::RenderContext;
use reportcard_render_core::utils::face_for;
use reportcard_render_core::{FontFace, Surface, TextRun, text_width, wrap_text};
use reportcard_style::{ElementStyle, FontWeight, TextAlign};
use reportcard_types::{Color, Rect};

/// Distance from the top of a line box to its baseline, per unit of font size.
const ASCENT: f32 = 0.8;
/// Offset from the vertical centre to the baseline that visually centres
/// capitals and digits.
const CENTERING_DROP: f32 = 0.35;

/// Paints `content` wrapped to the frame width, aligned per `style`.
///
/// Lines are not clipped to the frame height.
pub fn draw_text(
    surface: &mut dyn Surface,
    frame: Rect,
    content: &str,
    style: &ElementStyle,
    ctx: &RenderContext<'_>,
) {
    if content.trim().is_empty() {
        return;
    }

    let size = style.font_size.unwrap_or_else(|| ctx.font_size());
    if !(size > 0.0) {
        return;
    }
    let face = face_for(style.font_weight.unwrap_or(FontWeight::Normal), style.is_italic());
    let color = style.color.clone().unwrap_or_else(|| ctx.settings.text_color.clone());
    let align = style.text_align.unwrap_or_default();
    let leading = size * ctx.settings.line_height;

    for (index, line) in wrap_text(content, face, size, frame.width).into_iter().enumerate() {
        let width = text_width(&line, face, size);
        let x = match align {
            TextAlign::Left | TextAlign::Justify => frame.x,
            TextAlign::Right => frame.right() - width,
            TextAlign::Center => frame.x + (frame.width - width) / 2.0,
        };
        surface.text(&TextRun {
            text: line,
            x,
            y: frame.y + size * ASCENT + leading * index as f32,
            font: face,
            size,
            color: color.clone(),
        });
    }
}

/// Paints one unwrapped line centred both ways in `cell`.
pub fn draw_centered_line(
    surface: &mut dyn Surface,
    cell: Rect,
    text: &str,
    face: FontFace,
    size: f32,
    color: &Color,
) {
    let text = text.replace('\n', " ");
    if text.trim().is_empty() || !(size > 0.0) {
        return;
    }
    let width = text_width(&text, face, size);
    surface.text(&TextRun {
        x: cell.x + (cell.width - width) / 2.0,
        y: cell.y + cell.height / 2.0 + size * CENTERING_DROP,
        text,
        font: face,
        size,
        color: color.clone(),
    });
}
