//! Low-level nom parser functions for CSS-like style values.
//!
//! Templates carry lengths, colors and border shorthands as loose strings
//! (`"12px"`, `"#333"`, `"1px dashed #999"`). These parsers turn them into
//! typed values; callers decide whether a failure is ignorable.

use crate::border::{Border, BorderStyle};
use crate::font::{FontStyle, FontWeight};
use crate::text::TextAlign;
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, digit0, digit1, one_of, space0, space1};
use nom::combinator::{map_res, opt, recognize, rest, value};
use nom::sequence::{delimited, preceded};
use nom::{IResult, Parser};
use reportcard_types::Color;
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

// --- Number & Unit Parsers ---

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize((
            opt(one_of("+-")),
            alt((
                recognize((digit1, opt((char('.'), digit0)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

/// Template geometry is authored in CSS pixels, so `px` and `pt` are read
/// as-is and physical units are converted at 96 units per inch.
fn parse_unit(input: &str) -> IResult<&str, f32> {
    alt((
        value(1.0_f32, tag_no_case("px")),
        value(1.0_f32, tag_no_case("pt")),
        value(96.0_f32, tag_no_case("in")),
        value(37.795_f32, tag_no_case("cm")),
        value(3.7795_f32, tag_no_case("mm")),
    ))
    .parse(input)
}

/// Parses a length value with optional unit (e.g., "12px", "1in", "10mm").
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    let (input, number) = parse_f32(input)?;
    let (input, unit_multiplier) = opt(parse_unit).parse(input)?;
    Ok((input, number * unit_multiplier.unwrap_or(1.0)))
}

// --- Border Parsers ---

/// Parses a border style keyword.
pub fn parse_border_style(input: &str) -> IResult<&str, BorderStyle> {
    alt((
        value(BorderStyle::Solid, tag_no_case("solid")),
        value(BorderStyle::Dashed, tag_no_case("dashed")),
        value(BorderStyle::Dotted, tag_no_case("dotted")),
        value(BorderStyle::None, tag_no_case("none")),
    ))
    .parse(input)
}

/// Parses a border shorthand (e.g., "2px solid #00ff00"). The color may be
/// omitted, in which case the border is black.
pub fn parse_border(input: &str) -> IResult<&str, Border> {
    let (input, width) = delimited(space0, parse_length, space1).parse(input)?;
    let (input, style) = parse_border_style(input)?;
    let (input, color) = opt(preceded(
        space1,
        map_res(rest, |s: &str| s.trim().parse::<Color>()),
    ))
    .parse(input)?;
    Ok((
        input,
        Border {
            width,
            style,
            color: color.unwrap_or_default(),
        },
    ))
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Fn(&'a str) -> IResult<&'a str, T>,
{
    match parser(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

// --- High-level Parse Functions ---

/// Parses a color, returning `Ok(None)` for the keywords that mean "no paint".
pub fn parse_color(s: &str) -> Result<Option<Color>, StyleParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("transparent")
        || trimmed.eq_ignore_ascii_case("none")
    {
        return Ok(None);
    }
    trimmed
        .parse::<Color>()
        .map(Some)
        .map_err(|message| StyleParseError::InvalidValue {
            property: "color".to_string(),
            value: message,
        })
}

/// Parses a font weight string (e.g., "bold", "700").
pub fn parse_font_weight(s: &str) -> Result<FontWeight, StyleParseError> {
    match s.trim().to_lowercase().as_str() {
        "normal" | "regular" | "lighter" => Ok(FontWeight::Normal),
        "bold" | "bolder" => Ok(FontWeight::Bold),
        other => other
            .parse::<u16>()
            .map(FontWeight::from_numeric)
            .map_err(|_| StyleParseError::InvalidValue {
                property: "font-weight".to_string(),
                value: s.to_string(),
            }),
    }
}

/// Parses a font style string (e.g., "normal", "italic").
pub fn parse_font_style(s: &str) -> Result<FontStyle, StyleParseError> {
    match s.trim().to_lowercase().as_str() {
        "normal" => Ok(FontStyle::Normal),
        "italic" | "oblique" => Ok(FontStyle::Italic),
        _ => Err(StyleParseError::InvalidValue {
            property: "font-style".to_string(),
            value: s.to_string(),
        }),
    }
}

/// Parses a text-align value.
pub fn parse_text_align(s: &str) -> Result<TextAlign, StyleParseError> {
    match s.trim().to_lowercase().as_str() {
        "left" | "start" => Ok(TextAlign::Left),
        "right" | "end" => Ok(TextAlign::Right),
        "center" => Ok(TextAlign::Center),
        "justify" => Ok(TextAlign::Justify),
        _ => Err(StyleParseError::InvalidValue {
            property: "text-align".to_string(),
            value: s.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_length() {
        assert_eq!(run_parser(parse_length, "12px").unwrap(), 12.0);
        assert_eq!(run_parser(parse_length, "12pt").unwrap(), 12.0);
        assert_eq!(run_parser(parse_length, " 1in ").unwrap(), 96.0);
        assert_eq!(run_parser(parse_length, "10").unwrap(), 10.0);
        assert_eq!(run_parser(parse_length, ".5").unwrap(), 0.5);
        assert!(run_parser(parse_length, "abc").is_err());
        assert!(run_parser(parse_length, "12em").is_err());
    }

    #[test]
    fn test_parse_border() {
        let border = run_parser(parse_border, "2px solid #00ff00").unwrap();
        assert_eq!(border.width, 2.0);
        assert_eq!(border.style, BorderStyle::Solid);
        assert_eq!(border.color, Color::rgb(0, 255, 0));
    }

    #[test]
    fn test_parse_border_without_color_defaults_to_black() {
        let border = run_parser(parse_border, "1px dashed").unwrap();
        assert_eq!(border.style, BorderStyle::Dashed);
        assert_eq!(border.color, Color::BLACK);
    }

    #[test]
    fn test_parse_border_with_functional_color() {
        let border = run_parser(parse_border, "1.5px dotted rgb(1, 2, 3)").unwrap();
        assert_eq!(border.width, 1.5);
        assert_eq!(border.style, BorderStyle::Dotted);
        assert_eq!(border.color, Color::rgb(1, 2, 3));
    }

    #[test]
    fn test_parse_border_rejects_garbage() {
        assert!(run_parser(parse_border, "solid 1px black").is_err());
        assert!(run_parser(parse_border, "1px wavy black").is_err());
        assert!(run_parser(parse_border, "1px solid notacolor").is_err());
    }

    #[test]
    fn test_parse_color_keywords() {
        assert_eq!(parse_color("transparent").unwrap(), None);
        assert_eq!(parse_color("").unwrap(), None);
        assert_eq!(parse_color("#fff").unwrap(), Some(Color::WHITE));
        assert!(parse_color("#ff").is_err());
    }

    #[test]
    fn test_parse_font_weight() {
        assert_eq!(parse_font_weight("bold").unwrap(), FontWeight::Bold);
        assert_eq!(parse_font_weight("700").unwrap(), FontWeight::Bold);
        assert_eq!(parse_font_weight("400").unwrap(), FontWeight::Normal);
        assert!(parse_font_weight("heavy-ish").is_err());
    }

    #[test]
    fn test_parse_font_style_and_align() {
        assert_eq!(parse_font_style("italic").unwrap(), FontStyle::Italic);
        assert_eq!(parse_font_style("oblique").unwrap(), FontStyle::Italic);
        assert_eq!(parse_text_align("CENTER").unwrap(), TextAlign::Center);
        assert!(parse_text_align("middle").is_err());
    }
}
