//! Decoding a template document into typed elements.

use crate::element::{
    DEFAULT_TABLE_DIMENSION, DisplayType, DynamicSpec, Element, ElementKind, ImageSpec, ShapeKind,
    TableSpec, TableType,
};
use crate::error::TemplateError;
use crate::field::{DynamicField, ImageField};
use crate::lenient;
use crate::style_deser::parse_element_style;
use reportcard_types::Rect;
use serde_json::{Map, Value};
use std::convert::Infallible;
use std::str::FromStr;

/// An ordered list of elements. Array order is paint order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Template {
    pub elements: Vec<Element>,
}

impl Template {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    pub fn from_json(source: &str) -> Result<Self, TemplateError> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(&value)
    }

    /// Accepts both `{"elements": [...]}` and `{"content": {"elements": [...]}}`.
    ///
    /// Elements of an unknown `type` are dropped; everything else about an
    /// element is defaulted rather than rejected.
    pub fn from_value(value: &Value) -> Result<Self, TemplateError> {
        let root = value
            .as_object()
            .ok_or_else(|| TemplateError::Structure("template must be a JSON object".to_string()))?;

        let elements = match root.get("elements") {
            Some(elements) => elements,
            None => root
                .get("content")
                .and_then(|content| content.get("elements"))
                .ok_or_else(|| {
                    TemplateError::Structure(
                        "template has neither `elements` nor `content.elements`".to_string(),
                    )
                })?,
        };
        let raw = elements
            .as_array()
            .ok_or_else(|| TemplateError::Structure("`elements` must be an array".to_string()))?;

        let elements = raw
            .iter()
            .enumerate()
            .filter_map(|(index, raw)| {
                let element = decode_element(raw);
                if element.is_none() {
                    log::debug!("Skipping template element #{}: unsupported type", index);
                }
                element
            })
            .collect();

        Ok(Self { elements })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The image elements, in paint order.
    pub fn images(&self) -> impl Iterator<Item = &ImageSpec> {
        self.elements.iter().filter_map(|e| match &e.kind {
            ElementKind::Image(spec) => Some(spec),
            _ => None,
        })
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

/// Looks a key up in `metadata` first and the element itself second.
fn meta<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get("metadata")
        .and_then(|m| m.get(key))
        .or_else(|| obj.get(key))
        .filter(|v| !v.is_null())
}

fn parse_symbol<T: FromStr<Err = Infallible>>(value: Option<&Value>) -> T {
    let name = value.and_then(lenient::string).unwrap_or_default();
    match name.parse() {
        Ok(symbol) => symbol,
        Err(never) => match never {},
    }
}

fn decode_element(raw: &Value) -> Option<Element> {
    let obj = raw.as_object()?;
    let type_name = obj.get("type")?.as_str()?.trim().to_ascii_lowercase();

    let kind = match type_name.as_str() {
        "shape" => ElementKind::Shape(ShapeKind::Rect),
        "line" => ElementKind::Shape(ShapeKind::Line),
        "text" => ElementKind::Text {
            content: obj.get("content").and_then(lenient::string),
        },
        "dynamic" => ElementKind::Dynamic(DynamicSpec {
            field: parse_symbol::<DynamicField>(meta(obj, "field")),
            display_type: match meta(obj, "displayType").and_then(Value::as_str) {
                Some(s) if s.trim().eq_ignore_ascii_case("list") => DisplayType::List,
                _ => DisplayType::Inline,
            },
        }),
        "image" => ElementKind::Image(ImageSpec {
            field: parse_symbol::<ImageField>(meta(obj, "field")),
            is_placeholder: meta(obj, "isPlaceholder")
                .and_then(lenient::boolean)
                .unwrap_or(false),
        }),
        "table" => ElementKind::Table(decode_table(obj)),
        other => {
            log::debug!("Unknown element type '{}'", other);
            return None;
        }
    };

    let coord = |key: &str| obj.get(key).and_then(lenient::number).unwrap_or(0.0);
    let frame = Rect::new(coord("x"), coord("y"), coord("width"), coord("height"));

    Some(Element {
        id: obj.get("id").and_then(lenient::string),
        frame,
        style: obj.get("style").map(parse_element_style).unwrap_or_default(),
        kind,
    })
}

fn decode_table(obj: &Map<String, Value>) -> TableSpec {
    let dimension = |key: &str| {
        meta(obj, key)
            .and_then(lenient::count)
            .unwrap_or(DEFAULT_TABLE_DIMENSION)
    };
    let column_widths = meta(obj, "columnWidths").and_then(|v| {
        let widths = lenient::number_list(v);
        if widths.is_none() {
            log::warn!("Ignoring non-numeric columnWidths: {}", v);
        }
        widths
    });

    TableSpec {
        rows: dimension("rows"),
        cols: dimension("cols"),
        headers: meta(obj, "headers").map(lenient::string_list).unwrap_or_default(),
        table_type: meta(obj, "tableType")
            .and_then(Value::as_str)
            .map(TableType::from_tag)
            .unwrap_or_default(),
        column_widths,
        traits: meta(obj, "traits").map(lenient::string_list).unwrap_or_default(),
        skills: meta(obj, "skills").map(lenient::string_list).unwrap_or_default(),
    }
}
