use reportcard_render_core::{LineDash, Stroke, Surface};
use reportcard_style::ElementStyle;
use reportcard_types::{Point, Rect};

/// Fill, then outline, or else the bottom-border shorthand.
pub fn draw_shape(surface: &mut dyn Surface, frame: Rect, style: &ElementStyle) {
    if let Some(background) = &style.background_color {
        surface.fill_rect(frame, background);
    }

    match (&style.border_color, style.border_width) {
        (Some(color), Some(width)) if width > 0.0 => {
            surface.stroke_rect(frame, &Stroke::solid(width, color.clone()));
        }
        _ => {
            if let Some(border) = style.border_bottom.as_ref().filter(|b| !b.is_invisible()) {
                let y = frame.bottom();
                surface.line(
                    Point::new(frame.x, y),
                    Point::new(frame.right(), y),
                    &Stroke {
                        width: border.width,
                        color: border.color.clone(),
                        dash: LineDash::from(border.style),
                    },
                );
            }
        }
    }
}
