//! The generic table renderer.
//!
//! A table is a fixed grid: an optional header band of constant height,
//! then `rows` equal-height rows filling the rest of the frame. Rows never
//! grow to fit their content. Cell text is one centred line; anything wider
//! than its cell overflows visually.

use crate::context::RenderContext;
use crate::primitives::draw_centered_line;
use reportcard_record::{SubjectResult, format_number};
use reportcard_render_core::{FontFace, Stroke, Surface};
use reportcard_style::ElementStyle;
use reportcard_template::{TableSpec, TableType};
use reportcard_types::{Color, Point, Rect};

const MISSING: &str = "-";
/// Check mark height relative to the cell font size.
const CHECK_SCALE: f32 = 1.1;

/// What one body cell shows.
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Empty,
    Text(String),
    Bold(String),
    Check,
}

impl CellContent {
    fn text(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => CellContent::Text(v.to_string()),
            _ => CellContent::Empty,
        }
    }

    fn or_missing(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => CellContent::Text(v.to_string()),
            _ => CellContent::Text(MISSING.to_string()),
        }
    }
}

/// Column widths that sum to `total`.
///
/// Proportional weights are used only when there is exactly one per column
/// and they sum to a positive number; otherwise columns are equal.
pub fn column_widths(spec: &TableSpec, total: f32) -> Vec<f32> {
    if spec.cols == 0 {
        return Vec::new();
    }
    if let Some(weights) = &spec.column_widths
        && weights.len() == spec.cols
        && weights.iter().all(|w| *w >= 0.0)
    {
        let sum: f32 = weights.iter().sum();
        if sum > 0.0 {
            return weights.iter().map(|w| w / sum * total).collect();
        }
    }
    vec![total / spec.cols as f32; spec.cols]
}

/// Resolves a `subjects` cell by its column header.
pub fn subject_cell(result: &SubjectResult, header: &str, col: usize) -> CellContent {
    let key = header.trim().to_uppercase();

    if col == 0 || key.contains("SUBJECT") {
        return CellContent::text(result.subject_name());
    }
    match key.as_str() {
        "TOTAL" => CellContent::Bold(
            result
                .total
                .map(format_number)
                .unwrap_or_else(|| MISSING.to_string()),
        ),
        "GRADE" => CellContent::or_missing(result.grade.as_deref()),
        "REMARK" | "REMARKS" => CellContent::or_missing(result.remark.as_deref()),
        _ => {
            // First component whose name and the header contain one another.
            let score = result.component_scores.iter().find(|component| {
                let name = component.component_name().unwrap_or_default().trim().to_uppercase();
                key == name || key.contains(&name) || name.contains(&key)
            });
            CellContent::Text(
                score
                    .and_then(|component| component.score)
                    .map(format_number)
                    .unwrap_or_else(|| MISSING.to_string()),
            )
        }
    }
}

/// Resolves an affective or psychomotor cell for the trait `name`.
pub fn rating_cell(rating: Option<&str>, name: &str, header: &str, col: usize, cols: usize) -> CellContent {
    if col == 0 {
        return CellContent::text(Some(name));
    }
    if cols > 2 {
        match rating {
            Some(rating) if rating.trim() == header.trim() => CellContent::Check,
            _ => CellContent::Empty,
        }
    } else if col == 1 {
        CellContent::or_missing(rating)
    } else {
        CellContent::Empty
    }
}

fn body_cell(spec: &TableSpec, row: usize, col: usize, ctx: &RenderContext<'_>) -> CellContent {
    match spec.table_type {
        TableType::Subjects => ctx
            .data
            .results
            .get(row)
            .map(|result| subject_cell(result, spec.header(col), col))
            .unwrap_or(CellContent::Empty),
        TableType::Affective | TableType::Psychomotor => {
            let Some(name) = spec.rating_names().get(row) else {
                return CellContent::Empty;
            };
            let first = ctx.data.first_result();
            let rating = match spec.table_type {
                TableType::Affective => first.and_then(|r| r.affective_rating(name)),
                _ => first.and_then(|r| r.psychomotor_rating(name)),
            };
            rating_cell(rating, name, spec.header(col), col, spec.cols)
        }
        TableType::Other => CellContent::Empty,
    }
}

/// Paints a table element. `frame` and `style` are already in page units.
pub fn draw_table(
    surface: &mut dyn Surface,
    frame: Rect,
    spec: &TableSpec,
    style: &ElementStyle,
    ctx: &RenderContext<'_>,
) {
    if spec.cols == 0 {
        log::debug!("Table with zero columns draws nothing");
        return;
    }

    let widths = column_widths(spec, frame.width);
    let lefts: Vec<f32> = widths
        .iter()
        .scan(frame.x, |x, w| {
            let left = *x;
            *x += w;
            Some(left)
        })
        .collect();

    let settings = ctx.settings;
    let border = Stroke::solid(
        settings.border_width,
        style.border_color.clone().unwrap_or_else(|| settings.border_color.clone()),
    );
    let font_size = style.font_size.unwrap_or_else(|| ctx.table_font_size());
    let text_color = style.color.clone().unwrap_or_else(|| settings.text_color.clone());

    let top = frame.y;
    let mut y = top;

    let header_height = if spec.has_header() { ctx.table_header_height() } else { 0.0 };
    if header_height > 0.0 {
        let header_bg = style.header_bg_color.clone().unwrap_or_else(|| settings.header_background.clone());
        let header_fg = style.header_text_color.clone().unwrap_or_else(|| settings.header_text.clone());
        surface.fill_rect(Rect::new(frame.x, y, frame.width, header_height), &header_bg);
        for (col, (left, width)) in lefts.iter().zip(&widths).enumerate() {
            draw_centered_line(
                surface,
                Rect::new(*left, y, *width, header_height),
                &spec.header(col).to_uppercase(),
                FontFace::Bold,
                font_size,
                &header_fg,
            );
        }
        draw_dividers(surface, &lefts, y, y + header_height, &border);
        y += header_height;
    }

    let row_height = (frame.height - header_height).max(0.0) / spec.rows.max(1) as f32;
    for row in 0..spec.rows {
        if row % 2 == 1
            && let Some(alt) = &style.alt_row_color
        {
            surface.fill_rect(Rect::new(frame.x, y, frame.width, row_height), alt);
        }
        surface.line(Point::new(frame.x, y), Point::new(frame.right(), y), &border);
        draw_dividers(surface, &lefts, y, y + row_height, &border);

        for (col, (left, width)) in lefts.iter().zip(&widths).enumerate() {
            let cell = Rect::new(*left, y, *width, row_height);
            paint_cell(surface, cell, body_cell(spec, row, col, ctx), font_size, &text_color);
        }
        y += row_height;
    }

    surface.line(Point::new(frame.x, y), Point::new(frame.right(), y), &border);
    surface.stroke_rect(Rect::new(frame.x, top, frame.width, y - top), &border);
}

/// Vertical rules between columns; none after the last column.
fn draw_dividers(surface: &mut dyn Surface, lefts: &[f32], top: f32, bottom: f32, stroke: &Stroke) {
    for left in lefts.iter().skip(1) {
        surface.line(Point::new(*left, top), Point::new(*left, bottom), stroke);
    }
}

fn paint_cell(surface: &mut dyn Surface, cell: Rect, content: CellContent, size: f32, color: &Color) {
    match content {
        CellContent::Empty => {}
        CellContent::Text(text) => draw_centered_line(surface, cell, &text, FontFace::Regular, size, color),
        CellContent::Bold(text) => draw_centered_line(surface, cell, &text, FontFace::Bold, size, color),
        CellContent::Check => surface.check_mark(cell.center(), size * CHECK_SCALE, color),
    }
}
