use chrono::{DateTime, Local};
use crate::config::constants::{CODE_EXAMPLE_HIGHLIGHT_LINE, REPORT_TITLE};
use crate::enums::document_element::DocumentElement;
use crate::enums::normalized_block::NormalizedBlock;
use crate::enums::paragraph_style::ParagraphStyle;
use crate::helpers::inline_markup::escape;
use crate::services::code_block_formatter::CodeBlockFormatter;
use crate::services::rule_section_parser::RuleSectionParser;
use crate::structs::code_example::CodeExample;
use crate::structs::code_line::CodeLine;
use crate::structs::issue_record::IssueRecord;
use crate::structs::overview_metrics::OverviewMetrics;
use crate::structs::rule_detail::{RuleDetail, HOW_TO_FIX_SECTION, INTRODUCTION_SECTION, ROOT_CAUSE_SECTION};

const HEADER_BLUE: &str = "#1A4B7C";

/// Overview rows: label, then metric keys in lookup order.
const OVERVIEW_ROWS: [(&str, &[&str]); 7] = [
    ("Critical Issues", &["issues_critical"]),
    ("Major Issues", &["issues_major"]),
    ("Minor Issues", &["issues_minor"]),
    ("Info Issues", &["issues_info"]),
    ("Code Smells", &["issues_code_smell", "code_smells"]),
    ("Bugs", &["issues_bug", "bugs"]),
    ("Vulnerabilities", &["issues_vulnerability", "vulnerabilities"]),
];

pub struct DocumentRenderer {
    generated_at: DateTime<Local>,
}

impl DocumentRenderer {
    pub const fn new(generated_at: DateTime<Local>) -> Self {
        Self { generated_at }
    }

    /// Lays the report out front to back. `rule_lookup` returns `None` when a rule could not be fetched.
    pub fn render<'r, F>(
        &self,
        project_key: &str,
        overview: &OverviewMetrics,
        issues: &[IssueRecord],
        rule_lookup: F,
    ) -> Vec<DocumentElement>
    where
        F: Fn(&str) -> Option<&'r RuleDetail>,
    {
        let mut elements = Vec::new();
        self.add_title(&mut elements, project_key);
        Self::add_overview(&mut elements, overview);
        Self::add_detailed_issues(&mut elements, issues, rule_lookup);
        elements
    }

    fn add_title(&self, elements: &mut Vec<DocumentElement>, project_key: &str) {
        elements.push(DocumentElement::paragraph(
            format!("<font color=\"{HEADER_BLUE}\" size=\"28\"><b>{REPORT_TITLE}</b></font>"),
            ParagraphStyle::ReportHeader,
        ));
        elements.push(DocumentElement::paragraph(
            format!(
                "<font color=\"#333333\" size=\"14\"><b>{}</b></font><br/><font color=\"#666666\">Generated on {}</font>",
                escape(project_key),
                self.generated_at.format("%B %d, %Y at %H:%M"),
            ),
            ParagraphStyle::ProjectInfo,
        ));
    }

    pub fn overview_rows(overview: &OverviewMetrics) -> Vec<Vec<String>> {
        let mut rows = vec![vec!["Issue Type".to_string(), "Count".to_string()]];
        rows.extend(
            OVERVIEW_ROWS
                .iter()
                .map(|(label, keys)| vec![(*label).to_string(), overview.first_of_or_zero(keys).to_string()]),
        );
        rows
    }

    fn add_overview(elements: &mut Vec<DocumentElement>, overview: &OverviewMetrics) {
        if overview.is_empty() {
            return;
        }
        elements.push(DocumentElement::Table {
            rows: Self::overview_rows(overview),
            column_widths: vec![216.0, 72.0],
        });
        elements.push(DocumentElement::Spacer(20.0));
    }

    fn add_detailed_issues<'r, F>(elements: &mut Vec<DocumentElement>, issues: &[IssueRecord], rule_lookup: F)
    where
        F: Fn(&str) -> Option<&'r RuleDetail>,
    {
        elements.push(DocumentElement::Spacer(30.0));
        elements.push(DocumentElement::paragraph(
            format!("<font color=\"{HEADER_BLUE}\" size=\"20\"><b>Detailed Issue Analysis</b></font>"),
            ParagraphStyle::ReportHeader,
        ));
        elements.push(DocumentElement::Spacer(20.0));
        elements.push(DocumentElement::paragraph("Issue Details", ParagraphStyle::Heading));

        for (index, issue) in issues.iter().enumerate() {
            elements.push(DocumentElement::PageBreak);
            Self::add_issue_banner(elements, index + 1, issue);
            Self::add_location(elements, issue);

            let rule = rule_lookup(issue.rule.as_str());
            Self::add_why(elements, issue, rule);
            Self::add_how_to_fix(elements, rule);

            elements.push(DocumentElement::Spacer(20.0));
            elements.push(DocumentElement::paragraph(
                format!("<font color=\"#EEEEEE\">{}</font>", "═".repeat(100)),
                ParagraphStyle::Normal,
            ));
            elements.push(DocumentElement::Spacer(20.0));
        }
    }

    fn add_issue_banner(elements: &mut Vec<DocumentElement>, number: usize, issue: &IssueRecord) {
        elements.push(DocumentElement::paragraph(
            format!("<font color=\"#999999\" size=\"9\">ISSUE #{number}</font>"),
            ParagraphStyle::Normal,
        ));

        let (accent, _) = issue.severity.colors();
        elements.push(DocumentElement::paragraph(
            format!(
                "<font color=\"{accent}\">•</font> <font color=\"{accent}\"><b>{}</b></font><font color=\"#666666\"> | {}</font><br/><br/><font color=\"#333333\" size=\"12\">{}</font>",
                issue.severity,
                escape(issue.issue_type.as_deref().unwrap_or("Issue")),
                escape(issue.message.as_deref().unwrap_or("N/A")),
            ),
            ParagraphStyle::IssueTitle,
        ));
        elements.push(DocumentElement::paragraph(
            format!("<font color=\"#CCCCCC\">{}</font>", "─".repeat(80)),
            ParagraphStyle::Normal,
        ));
    }

    fn add_location(elements: &mut Vec<DocumentElement>, issue: &IssueRecord) {
        elements.push(Self::section_header("Where is this issue?"));
        let line = issue.line.map_or_else(|| "N/A".to_string(), |l| l.to_string());
        elements.push(DocumentElement::paragraph(
            format!("<b>File:</b> {}<br/><b>Line:</b> {line}", escape(issue.file_path())),
            ParagraphStyle::IssueDescription,
        ));
    }

    fn add_why(elements: &mut Vec<DocumentElement>, issue: &IssueRecord, rule: Option<&RuleDetail>) {
        elements.push(Self::section_header("Why is this an issue?"));

        let Some(rule) = rule else {
            elements.push(DocumentElement::paragraph(
                format!("<i>Rule details unavailable for {}.</i>", escape(&issue.rule)),
                ParagraphStyle::IssueDescription,
            ));
            return;
        };

        let mut contents: Vec<&str> = rule
            .sections(INTRODUCTION_SECTION)
            .chain(rule.sections(ROOT_CAUSE_SECTION))
            .map(|s| s.content.as_str())
            .collect();
        if contents.is_empty() && rule.description_sections.is_empty() {
            contents.extend(rule.html_desc.as_deref());
        }

        for content in contents {
            Self::add_blocks(elements, &RuleSectionParser::parse(content));
        }
    }

    fn add_how_to_fix(elements: &mut Vec<DocumentElement>, rule: Option<&RuleDetail>) {
        elements.push(Self::section_header("How can I fix it?"));

        let sections: Vec<_> = rule.map(|r| r.sections(HOW_TO_FIX_SECTION).collect()).unwrap_or_default();
        if sections.is_empty() {
            elements.push(DocumentElement::paragraph(
                "<i>No remediation guidance available for this rule.</i>",
                ParagraphStyle::IssueDescription,
            ));
            return;
        }

        for section in sections {
            if let Some(context) = section.context.as_ref().filter(|c| !c.display_name.is_empty()) {
                elements.push(DocumentElement::paragraph(
                    format!("<b>{}</b>", escape(&context.display_name)),
                    ParagraphStyle::IssueDescription,
                ));
            }
            Self::add_blocks(elements, &RuleSectionParser::parse(&section.content));
        }
    }

    fn add_blocks(elements: &mut Vec<DocumentElement>, blocks: &[NormalizedBlock]) {
        for block in blocks {
            match block {
                NormalizedBlock::Paragraph(_) | NormalizedBlock::Emphasis(_) => {
                    elements.push(DocumentElement::paragraph(block.text(), ParagraphStyle::IssueDescription));
                    elements.push(DocumentElement::Spacer(4.0));
                }
                NormalizedBlock::Bullet(_) => {
                    elements.push(DocumentElement::paragraph(block.text(), ParagraphStyle::BulletPoint));
                    elements.push(DocumentElement::Spacer(4.0));
                }
                NormalizedBlock::Code(example) => Self::add_code_example(elements, example),
            }
        }
    }

    fn add_code_example(elements: &mut Vec<DocumentElement>, example: &CodeExample) {
        let lines = CodeLine::from_snippet(&example.code);
        let highlight = example.diff_type.map(|diff_type| {
            elements.push(DocumentElement::paragraph(
                format!("<font color=\"{}\">{}</font>", diff_type.color(), diff_type.label()),
                ParagraphStyle::SectionHeader,
            ));
            CODE_EXAMPLE_HIGHLIGHT_LINE
        });

        elements.push(DocumentElement::Preformatted {
            text: CodeBlockFormatter::format(&lines, highlight),
        });
        elements.push(DocumentElement::Spacer(10.0));
    }

    fn section_header(title: &str) -> DocumentElement {
        DocumentElement::paragraph(
            format!("<font color=\"{HEADER_BLUE}\">{title}</font>"),
            ParagraphStyle::SectionHeader,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn renderer() -> DocumentRenderer {
        DocumentRenderer::new(Local.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap())
    }

    #[test]
    fn overview_rows_follow_fixed_order_and_default_to_zero() {
        let mut overview = OverviewMetrics::new();
        overview.insert("issues_major", "2");
        overview.insert("issues_critical", "1");
        overview.insert("bugs", "3");

        let rows = DocumentRenderer::overview_rows(&overview);
        let labels: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(
            labels,
            ["Issue Type", "Critical Issues", "Major Issues", "Minor Issues", "Info Issues", "Code Smells", "Bugs", "Vulnerabilities"]
        );
        assert_eq!(rows[1][1], "1");
        assert_eq!(rows[2][1], "2");
        assert_eq!(rows[3][1], "0");
        assert_eq!(rows[6][1], "3");
        assert_eq!(rows[7][1], "0");
    }

    #[test]
    fn empty_overview_omits_the_table() {
        let elements = renderer().render("p", &OverviewMetrics::new(), &[], |_| None);
        assert!(!elements.iter().any(|e| matches!(e, DocumentElement::Table { .. })));
    }

    #[test]
    fn title_carries_project_and_timestamp() {
        let elements = renderer().render("acme<shop>", &OverviewMetrics::new(), &[], |_| None);
        match &elements[1] {
            DocumentElement::Paragraph { markup, .. } => {
                assert!(markup.contains("acme&lt;shop&gt;"));
                assert!(markup.contains("Generated on March 14, 2026 at 09:30"));
            }
            other => panic!("unexpected element {other:?}"),
        }
    }
}
