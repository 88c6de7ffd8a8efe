use crate::structs::style_spec::{Alignment, StyleSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphStyle {
    ReportHeader,
    ProjectInfo,
    Heading,
    SectionHeader,
    IssueTitle,
    IssueDescription,
    BulletPoint,
    Normal,
}

impl ParagraphStyle {
    pub const fn spec(self) -> StyleSpec {
        match self {
            Self::ReportHeader => StyleSpec {
                font_size: 28.0,
                leading: 32.0,
                left_indent: 0.0,
                first_line_indent: 0.0,
                space_before: 0.0,
                space_after: 20.0,
                color: "#1A4B7C",
                alignment: Alignment::Center,
                bold: true,
            },
            Self::ProjectInfo => StyleSpec {
                font_size: 12.0,
                leading: 18.0,
                left_indent: 0.0,
                first_line_indent: 0.0,
                space_before: 0.0,
                space_after: 30.0,
                color: "#666666",
                alignment: Alignment::Center,
                bold: false,
            },
            Self::Heading => StyleSpec {
                font_size: 18.0,
                leading: 22.0,
                left_indent: 0.0,
                first_line_indent: 0.0,
                space_before: 12.0,
                space_after: 6.0,
                color: "#000000",
                alignment: Alignment::Left,
                bold: true,
            },
            Self::SectionHeader => StyleSpec {
                font_size: 12.0,
                leading: 18.0,
                left_indent: 0.0,
                first_line_indent: 0.0,
                space_before: 20.0,
                space_after: 10.0,
                color: "#1A4B7C",
                alignment: Alignment::Left,
                bold: true,
            },
            Self::IssueTitle => StyleSpec {
                font_size: 14.0,
                leading: 20.0,
                left_indent: 10.0,
                first_line_indent: 0.0,
                space_before: 10.0,
                space_after: 15.0,
                color: "#2B547E",
                alignment: Alignment::Left,
                bold: false,
            },
            Self::IssueDescription => StyleSpec {
                font_size: 11.0,
                leading: 16.0,
                left_indent: 20.0,
                first_line_indent: 0.0,
                space_before: 8.0,
                space_after: 8.0,
                color: "#333333",
                alignment: Alignment::Left,
                bold: false,
            },
            Self::BulletPoint => StyleSpec {
                font_size: 11.0,
                leading: 16.0,
                left_indent: 40.0,
                first_line_indent: -20.0,
                space_before: 4.0,
                space_after: 4.0,
                color: "#333333",
                alignment: Alignment::Left,
                bold: false,
            },
            Self::Normal => StyleSpec {
                font_size: 10.0,
                leading: 12.0,
                left_indent: 0.0,
                first_line_indent: 0.0,
                space_before: 0.0,
                space_after: 0.0,
                color: "#000000",
                alignment: Alignment::Left,
                bold: false,
            },
        }
    }
}
