use crate::structs::code_example::CodeExample;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedBlock {
    Paragraph(String),
    Bullet(String),
    /// A block that consists of a single bold run, e.g. a former heading.
    Emphasis(String),
    Code(CodeExample),
}

impl NormalizedBlock {
    pub fn text(&self) -> &str {
        match self {
            Self::Paragraph(text) | Self::Bullet(text) | Self::Emphasis(text) => text,
            Self::Code(example) => &example.code,
        }
    }
}
