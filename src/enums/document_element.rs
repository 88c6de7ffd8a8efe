use crate::enums::paragraph_style::ParagraphStyle;

/// One flowable unit of the report, laid out front to back by the PDF writer.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentElement {
    /// Inline markup: `<b>`, `<i>`, `<font>`, `<br/>` and HTML entities.
    Paragraph { markup: String, style: ParagraphStyle },
    Table { rows: Vec<Vec<String>>, column_widths: Vec<f32> },
    Spacer(f32),
    PageBreak,
    /// Plain fixed-width text, rendered line by line.
    Preformatted { text: String },
}

impl DocumentElement {
    pub fn paragraph(markup: impl Into<String>, style: ParagraphStyle) -> Self {
        Self::Paragraph { markup: markup.into(), style }
    }
}
