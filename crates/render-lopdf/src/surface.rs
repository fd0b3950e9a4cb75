use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};
use reportcard_render_core::utils::{base_font_name, flip_y};
use reportcard_render_core::{FontFace, LineDash, RasterImage, RenderError, Stroke, Surface, TextRun};
use reportcard_types::{Color, Point, Rect, Size};
use std::io::Write;

/// Physical page sizes in PDF points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageFormat {
    #[default]
    A4,
    Letter,
    Custom { width: f32, height: f32 },
}

impl PageFormat {
    pub fn size(&self) -> Size {
        match *self {
            PageFormat::A4 => Size::new(595.28, 841.89),
            PageFormat::Letter => Size::new(612.0, 792.0),
            PageFormat::Custom { width, height } => Size::new(width, height),
        }
    }
}

const FACES: [FontFace; 4] = [
    FontFace::Regular,
    FontFace::Bold,
    FontFace::Oblique,
    FontFace::BoldOblique,
];
const DINGBATS_RESOURCE: &str = "F5";
/// `a20` in ZapfDingbats, a heavy check mark.
const CHECK_GLYPH: u8 = b'4';
const CHECK_GLYPH_WIDTH: f32 = 0.76;

fn font_resource(face: FontFace) -> &'static str {
    match face {
        FontFace::Regular => "F1",
        FontFace::Bold => "F2",
        FontFace::Oblique => "F3",
        FontFace::BoldOblique => "F4",
    }
}

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
    dash: LineDash,
}

/// A single-page PDF canvas.
pub struct PdfSurface {
    size: Size,
    document: Document,
    operations: Vec<Operation>,
    state: PageRenderState,
    images: Vec<(String, ObjectId)>,
}

impl PdfSurface {
    /// Fails only for a page that is not positive and finite in both axes.
    pub fn new(format: PageFormat) -> Result<Self, RenderError> {
        let size = format.size();
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(size.width) || !valid(size.height) {
            return Err(RenderError::InvalidPage {
                width: size.width,
                height: size.height,
            });
        }
        Ok(Self {
            size,
            document: Document::with_version("1.7"),
            operations: Vec::new(),
            state: PageRenderState::default(),
            images: Vec::new(),
        })
    }

    /// Serialises the page into a complete PDF file.
    pub fn finish(self) -> Result<Vec<u8>, RenderError> {
        let PdfSurface {
            size,
            mut document,
            operations,
            images,
            ..
        } = self;

        let mut fonts = Dictionary::new();
        for face in FACES {
            fonts.set(
                font_resource(face),
                dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => base_font_name(face),
                    "Encoding" => "WinAnsiEncoding",
                },
            );
        }
        fonts.set(
            DINGBATS_RESOURCE,
            dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => "ZapfDingbats",
            },
        );

        let mut xobjects = Dictionary::new();
        for (name, id) in images {
            xobjects.set(name, Object::Reference(id));
        }

        let resources_id = document.add_object(dictionary! {
            "Font" => fonts,
            "XObject" => xobjects,
        });

        let content = Content { operations }.encode()?;
        let content_id = document.add_object(Stream::new(Dictionary::new(), content));

        let pages_id = document.new_object_id();
        let page_id = document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                Object::Real(0.0),
                Object::Real(0.0),
                Object::Real(size.width),
                Object::Real(size.height),
            ],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![Object::Reference(page_id)],
                "Count" => 1_i64,
            }),
        );
        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        document.save_to(&mut buffer)?;
        Ok(buffer)
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.operations.push(Operation::new(operator, operands));
    }

    fn set_fill_color(&mut self, color: &Color) {
        if self.state.fill_color.as_ref() != Some(color) {
            self.push("rg", rgb_operands(color));
            self.state.fill_color = Some(color.clone());
        }
    }

    fn set_stroke(&mut self, stroke: &Stroke) {
        if self.state.line_width != Some(stroke.width) {
            self.push("w", vec![Object::Real(stroke.width)]);
            self.state.line_width = Some(stroke.width);
        }
        if self.state.stroke_color.as_ref() != Some(&stroke.color) {
            self.push("RG", rgb_operands(&stroke.color));
            self.state.stroke_color = Some(stroke.color.clone());
        }
        if self.state.dash != stroke.dash {
            let pattern = match stroke.dash {
                LineDash::Solid => vec![],
                LineDash::Dashed => vec![Object::Integer(4), Object::Integer(3)],
                LineDash::Dotted => vec![Object::Integer(1), Object::Integer(2)],
            };
            self.push("d", vec![Object::Array(pattern), Object::Integer(0)]);
            self.state.dash = stroke.dash;
        }
    }

    fn begin_text(&mut self, resource: &str, size: f32, color: &Color, x: f32, baseline: f32) {
        self.push("BT", vec![]);
        self.push(
            "Tf",
            vec![Object::Name(resource.as_bytes().to_vec()), Object::Real(size)],
        );
        self.set_fill_color(color);
        let pdf_y = flip_y(baseline, self.size.height);
        self.push("Td", vec![Object::Real(x), Object::Real(pdf_y)]);
    }

    fn encode_image(image: &RasterImage) -> std::io::Result<Vec<u8>> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&image.rgb)?;
        encoder.finish()
    }
}

fn rgb_operands(color: &Color) -> Vec<Object> {
    color.components().into_iter().map(Object::Real).collect()
}

/// Encodes text for the `WinAnsiEncoding` fonts. Latin-1 maps directly, the
/// 0x80..0x9F block holds typographic punctuation, anything else is `?`.
fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        '\u{20AC}' => 0x80,
        '\u{201A}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201E}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02C6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8A,
        '\u{2039}' => 0x8B,
        '\u{0152}' => 0x8C,
        '\u{017D}' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02DC}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9A,
        '\u{203A}' => 0x9B,
        '\u{0153}' => 0x9C,
        '\u{017E}' => 0x9E,
        '\u{0178}' => 0x9F,
        // C1 controls have no glyph in this encoding.
        '\u{0080}'..='\u{009F}' => b'?',
        c if (c as u32) <= 0xFF => c as u8,
        _ => b'?',
    }
}

impl Surface for PdfSurface {
    fn page_size(&self) -> Size {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: &Color) {
        if rect.is_degenerate() {
            return;
        }
        self.set_fill_color(color);
        let y = flip_y(rect.bottom(), self.size.height);
        self.push(
            "re",
            vec![
                Object::Real(rect.x),
                Object::Real(y),
                Object::Real(rect.width),
                Object::Real(rect.height),
            ],
        );
        self.push("f", vec![]);
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        if rect.is_degenerate() || !(stroke.width > 0.0) {
            return;
        }
        self.set_stroke(stroke);
        let y = flip_y(rect.bottom(), self.size.height);
        self.push(
            "re",
            vec![
                Object::Real(rect.x),
                Object::Real(y),
                Object::Real(rect.width),
                Object::Real(rect.height),
            ],
        );
        self.push("S", vec![]);
    }

    fn line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        if !(stroke.width > 0.0) {
            return;
        }
        self.set_stroke(stroke);
        let height = self.size.height;
        self.push(
            "m",
            vec![Object::Real(from.x), Object::Real(flip_y(from.y, height))],
        );
        self.push(
            "l",
            vec![Object::Real(to.x), Object::Real(flip_y(to.y, height))],
        );
        self.push("S", vec![]);
    }

    fn text(&mut self, run: &TextRun) {
        if run.text.is_empty() || !(run.size > 0.0) {
            return;
        }
        self.begin_text(font_resource(run.font), run.size, &run.color, run.x, run.y);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(&run.text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    fn image(&mut self, image: &RasterImage, rect: Rect) {
        if !image.is_valid() || rect.is_degenerate() {
            log::debug!("Skipping empty image or zero-size image box");
            return;
        }
        let data = match Self::encode_image(image) {
            Ok(data) => data,
            Err(e) => {
                log::warn!("Failed to compress image data: {}", e);
                return;
            }
        };
        let stream = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(image.width),
                "Height" => i64::from(image.height),
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8_i64,
                "Filter" => "FlateDecode",
            },
            data,
        );
        let id = self.document.add_object(stream);
        let name = format!("Im{}", self.images.len() + 1);
        self.images.push((name.clone(), id));

        let y = flip_y(rect.bottom(), self.size.height);
        self.push("q", vec![]);
        self.push(
            "cm",
            vec![
                Object::Real(rect.width),
                Object::Real(0.0),
                Object::Real(0.0),
                Object::Real(rect.height),
                Object::Real(rect.x),
                Object::Real(y),
            ],
        );
        self.push("Do", vec![Object::Name(name.into_bytes())]);
        self.push("Q", vec![]);
    }

    fn check_mark(&mut self, center: Point, size: f32, color: &Color) {
        if !(size > 0.0) {
            return;
        }
        let x = center.x - size * CHECK_GLYPH_WIDTH / 2.0;
        let baseline = center.y + size * 0.35;
        self.begin_text(DINGBATS_RESOURCE, size, color, x, baseline);
        self.push(
            "Tj",
            vec![Object::String(vec![CHECK_GLYPH], StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }
}
