use crate::enums::pdf_font::PdfFont;

const COURIER_ADVANCE: u16 = 600;
const BOLD_SCALE: f32 = 1.06;

/// Helvetica advance widths in thousandths of an em, from the standard AFM metrics.
const fn helvetica_advance(c: char) -> u16 {
    match c {
        ' ' | 'f' | 't' | 'I' | '.' | ',' | ':' | ';' | '!' | '/' | '[' | ']' => 278,
        'i' | 'j' | 'l' => 222,
        'r' | '(' | ')' | '-' => 333,
        'c' | 'k' | 's' | 'v' | 'x' | 'y' | 'z' | 'J' => 500,
        'm' | 'M' => 833,
        'w' | 'C' | 'D' | 'H' | 'N' | 'R' | 'U' => 722,
        'A' | 'B' | 'E' | 'K' | 'P' | 'S' | 'V' | 'X' | 'Y' | '&' => 667,
        'F' | 'T' | 'Z' => 611,
        'G' | 'O' | 'Q' => 778,
        'L' => 556,
        'W' => 944,
        '\'' => 191,
        '"' => 355,
        '*' => 389,
        '{' | '}' => 334,
        '|' => 260,
        '+' | '=' | '<' | '>' | '~' => 584,
        '%' => 889,
        '@' => 1015,
        _ => 556,
    }
}

pub fn char_width(c: char, font: PdfFont, size: f32) -> f32 {
    let advance = if font.is_monospace() {
        COURIER_ADVANCE
    } else {
        helvetica_advance(c)
    };
    let scale = if font.is_bold() && !font.is_monospace() { BOLD_SCALE } else { 1.0 };
    f32::from(advance) * scale * size / 1000.0
}

pub fn text_width(text: &str, font: PdfFont, size: f32) -> f32 {
    text.chars().map(|c| char_width(c, font, size)).sum()
}
