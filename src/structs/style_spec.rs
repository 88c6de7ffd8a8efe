#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
}

/// Layout parameters for one paragraph style, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSpec {
    pub font_size: f32,
    pub leading: f32,
    pub left_indent: f32,
    pub first_line_indent: f32,
    pub space_before: f32,
    pub space_after: f32,
    pub color: &'static str,
    pub alignment: Alignment,
    pub bold: bool,
}
