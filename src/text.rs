use crate::theme::RenderStyle;

/// Points per canvas unit.
pub const POINTS_PER_UNIT: f32 = 72.0;

/// Estimated extent of a block of text, in canvas units.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub lines: Vec<String>,
    pub width: f32,
    pub height: f32,
}

pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(|line| line.to_string()).collect()
}

/// Line advance for `font_size` points, in canvas units.
pub fn line_advance(font_size: f32, style: &RenderStyle) -> f32 {
    font_size * style.line_height / POINTS_PER_UNIT
}

/// Measures text without consulting system fonts so layouts stay reproducible.
pub fn measure_text(text: &str, font_size: f32, bold: bool, style: &RenderStyle) -> TextBlock {
    let lines = split_lines(text);
    let weight = if bold { 1.07 } else { 1.0 };
    let width_pt = lines
        .iter()
        .map(|line| line.chars().map(char_width_factor).sum::<f32>() * font_size * weight)
        .fold(0.0_f32, f32::max);
    let height = lines.len() as f32 * line_advance(font_size, style);
    TextBlock {
        lines,
        width: width_pt / POINTS_PER_UNIT,
        height,
    }
}

pub(crate) fn char_width_factor(ch: char) -> f32 {
    // Advance widths in em for a Helvetica-like sans face.
    match ch {
        ' ' => 0.278,
        '.' | ',' | ':' | ';' | '!' | '|' | '\'' => 0.278,
        '(' | ')' | '[' | ']' | '-' => 0.333,
        'I' | 'i' | 'j' | 'l' => 0.25,
        'f' | 't' | 'r' => 0.333,
        'M' | 'W' => 0.833,
        'm' | 'w' => 0.778,
        'A' | 'B' | 'C' | 'D' | 'H' | 'K' | 'N' | 'R' | 'U' | 'V' | 'X' | 'Y' => 0.722,
        'G' | 'O' | 'Q' => 0.778,
        'E' | 'F' | 'L' | 'P' | 'S' | 'T' | 'Z' => 0.667,
        'J' => 0.5,
        '0'..='9' => 0.556,
        '<' | '>' | '+' | '=' => 0.584,
        '→' => 1.0,
        c if c.is_ascii_lowercase() => 0.556,
        _ => 0.6,
    }
}
