//! Lenient decoding of an element's `style` object.
//!
//! Templates may write:
//! - Numeric values: `"fontSize": 24`
//! - String dimensions: `"fontSize": "24px"`
//! - Kebab-case or camelCase field names
//!
//! A value that cannot be parsed leaves its property unset and logs a
//! warning; it never rejects the element.

use crate::lenient;
use reportcard_style::ElementStyle;
use reportcard_style::parsers::{
    StyleParseError, parse_border, parse_color, parse_font_style, parse_font_weight,
    parse_text_align, run_parser,
};
use reportcard_types::Color;
use serde_json::Value;

/// Parse a single ElementStyle from a JSON value with flexible field parsing.
pub(crate) fn parse_element_style(value: &Value) -> ElementStyle {
    let mut style = ElementStyle::default();
    let Some(obj) = value.as_object() else {
        if !value.is_null() {
            log::warn!("Ignoring non-object style: {}", value);
        }
        return style;
    };

    for (key, val) in obj {
        if val.is_null() {
            continue;
        }
        let normalized_key = key.replace('-', "_").to_lowercase();

        match normalized_key.as_str() {
            "color" => style.color = color(key, val),
            "font_size" | "fontsize" => style.font_size = dimension(key, val),
            "font_weight" | "fontweight" => {
                style.font_weight = match val {
                    Value::Number(n) => n
                        .as_u64()
                        .map(|w| reportcard_style::FontWeight::from_numeric(w.min(1000) as u16)),
                    other => keyword(key, other, parse_font_weight),
                };
            }
            "font_style" | "fontstyle" => style.font_style = keyword(key, val, parse_font_style),
            "text_align" | "textalign" => style.text_align = keyword(key, val, parse_text_align),
            "background_color" | "backgroundcolor" => style.background_color = color(key, val),
            "border_color" | "bordercolor" => style.border_color = color(key, val),
            "border_width" | "borderwidth" => style.border_width = dimension(key, val),
            "border_bottom" | "borderbottom" => {
                style.border_bottom = val.as_str().and_then(|s| {
                    run_parser(parse_border, s)
                        .inspect_err(|e| log::warn!("Ignoring style '{}': {}", key, e))
                        .ok()
                });
            }
            "header_bg_color" | "headerbgcolor" => style.header_bg_color = color(key, val),
            "header_text_color" | "headertextcolor" => style.header_text_color = color(key, val),
            "alt_row_color" | "altrowcolor" => style.alt_row_color = color(key, val),
            _ => {
                // Ignore unknown fields for forward compatibility
                log::debug!("Ignoring unknown style property '{}'", key);
            }
        }
    }

    style
}

fn color(key: &str, val: &Value) -> Option<Color> {
    let s = val.as_str()?;
    parse_color(s)
        .inspect_err(|e| log::warn!("Ignoring style '{}': {}", key, e))
        .ok()
        .flatten()
}

fn dimension(key: &str, val: &Value) -> Option<f32> {
    let parsed = lenient::number(val);
    if parsed.is_none() {
        log::warn!("Ignoring style '{}': not a dimension: {}", key, val);
    }
    parsed
}

fn keyword<T>(key: &str, val: &Value, parse: fn(&str) -> Result<T, StyleParseError>) -> Option<T> {
    let s = val.as_str()?;
    parse(s)
        .inspect_err(|e| log::warn!("Ignoring style '{}': {}", key, e))
        .ok()
}
