//! Paints a whole template, element by element.

use crate::context::RenderContext;
use crate::fields;
use crate::primitives::{ImageOutcome, draw_image, draw_shape, draw_text};
use crate::table::draw_table;
use reportcard_render_core::Surface;
use reportcard_template::{ElementKind, Template};

/// Counts reported after a paint pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub elements: usize,
    pub image_fallbacks: usize,
}

/// Paints `template` onto `surface` in array order; later elements cover
/// earlier ones. Each element is scaled once, then dispatched on its kind.
/// No element can stop the ones after it from painting.
pub fn render(surface: &mut dyn Surface, template: &Template, ctx: &RenderContext<'_>) -> RenderSummary {
    let mut summary = RenderSummary::default();

    for element in &template.elements {
        let element = ctx.scaler.element(element);
        let frame = element.frame;
        let style = &element.style;

        match &element.kind {
            ElementKind::Shape(_) => draw_shape(surface, frame, style),
            ElementKind::Text { content } => {
                draw_text(surface, frame, content.as_deref().unwrap_or_default(), style, ctx)
            }
            ElementKind::Dynamic(spec) => {
                let value = fields::resolve(&spec.field, spec.display_type, ctx.data);
                draw_text(surface, frame, &value, style, ctx);
            }
            ElementKind::Image(spec) => {
                if draw_image(surface, frame, spec, ctx) == ImageOutcome::Failed {
                    summary.image_fallbacks += 1;
                }
            }
            ElementKind::Table(spec) => draw_table(surface, frame, spec, style, ctx),
        }
        summary.elements += 1;
    }

    log::debug!(
        "Painted {} elements ({} image fallbacks)",
        summary.elements,
        summary.image_fallbacks
    );
    summary
}
