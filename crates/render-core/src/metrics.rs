//! Advance widths of the base-14 Helvetica faces.
//!
//! Widths are in thousandths of the font size, from the Adobe AFM files,
//! for the printable ASCII range. The oblique cuts share the upright widths.

use crate::surface::FontFace;

/// Width used for characters outside the table.
const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,      // 'p'..'~'
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0'..'?'
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P'..'_'
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`'..'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,      // 'p'..'~'
];

fn char_width(c: char, face: FontFace) -> u16 {
    let table = if face.is_bold() { &HELVETICA_BOLD } else { &HELVETICA };
    match c as u32 {
        code @ 32..=126 => table[(code - 32) as usize],
        _ => FALLBACK_WIDTH,
    }
}

/// Width of `text` set in `face` at `size`, in the same units as `size`.
pub fn text_width(text: &str, face: FontFace, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c, face))).sum();
    units as f32 * size / 1000.0
}

/// Greedy word wrap to `max_width`. Explicit newlines always break; a single
/// word wider than the limit gets a line of its own rather than being split.
pub fn wrap_text(text: &str, face: FontFace, size: f32, max_width: f32) -> Vec<String> {
    let space = text_width(" ", face, size);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0.0;

        for word in paragraph.split_whitespace() {
            let word_width = text_width(word, face, size);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else if current_width + space + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += space + word_width;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_width;
            }
        }
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_widths() {
        assert_eq!(text_width("A", FontFace::Regular, 1000.0), 667.0);
        assert_eq!(text_width("A", FontFace::Bold, 1000.0), 722.0);
        assert_eq!(text_width("i", FontFace::Oblique, 1000.0), 222.0);
        assert_eq!(text_width("i", FontFace::BoldOblique, 1000.0), 278.0);
        assert_eq!(text_width("~", FontFace::Regular, 1000.0), 584.0);
    }

    #[test]
    fn width_scales_with_size() {
        let w10 = text_width("Report Card", FontFace::Regular, 10.0);
        let w20 = text_width("Report Card", FontFace::Regular, 20.0);
        assert!((w20 - 2.0 * w10).abs() < 1e-4);
    }

    #[test]
    fn non_ascii_uses_fallback() {
        assert_eq!(text_width("é", FontFace::Regular, 1000.0), 556.0);
    }

    #[test]
    fn wrap_breaks_between_words() {
        // "aaa" is 1668 units at size 1000; two of them plus a space do not fit in 3000.
        let lines = wrap_text("aaa aaa", FontFace::Regular, 1000.0, 3000.0);
        assert_eq!(lines, vec!["aaa", "aaa"]);
        let lines = wrap_text("aaa aaa", FontFace::Regular, 1000.0, 4000.0);
        assert_eq!(lines, vec!["aaa aaa"]);
    }

    #[test]
    fn wrap_keeps_explicit_newlines_and_long_words() {
        let lines = wrap_text("A: 70-100\nB: 60-69", FontFace::Regular, 10.0, 1000.0);
        assert_eq!(lines, vec!["A: 70-100", "B: 60-69"]);
        let lines = wrap_text("Supercalifragilistic", FontFace::Regular, 10.0, 5.0);
        assert_eq!(lines, vec!["Supercalifragilistic"]);
    }

    #[test]
    fn wrap_of_empty_text_is_one_empty_line() {
        assert_eq!(wrap_text("", FontFace::Regular, 10.0, 100.0), vec![String::new()]);
    }
}
