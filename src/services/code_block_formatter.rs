use once_cell::sync::Lazy;
use regex::Regex;
use crate::config::constants::MAX_CODE_LINE_LENGTH;
use crate::helpers::html_entities::decode_entities;
use crate::structs::code_line::CodeLine;

pub const SEPARATOR: &str = "│";
pub const WRAP_MARKER: &str = "↩";
pub const HIGHLIGHT_MARKER: &str = "<<<";

static SPAN_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?span\b[^>]*>").expect("valid pattern"));

pub struct CodeBlockFormatter;

impl CodeBlockFormatter {
    /// Renders numbered lines as plain fixed-width text, soft-wrapping long lines.
    pub fn format(lines: &[CodeLine], highlight_line: Option<usize>) -> String {
        Self::format_with_width(lines, highlight_line, MAX_CODE_LINE_LENGTH)
    }

    pub fn format_with_width(lines: &[CodeLine], highlight_line: Option<usize>, width: usize) -> String {
        let width = width.max(1);
        let mut formatted: Vec<String> = Vec::with_capacity(lines.len());

        for line in lines {
            let code = Self::plain_code(&line.code);
            let chars: Vec<char> = code.chars().collect();
            let number = format!("{:>4}", line.number);

            if chars.len() > width {
                let mut chunks = chars.chunks(width).map(|c| c.iter().collect::<String>());
                let first = chunks.next().unwrap_or_default();
                formatted.push(format!("{number} {SEPARATOR} {first} {WRAP_MARKER}"));
                for chunk in chunks {
                    formatted.push(format!("     {SEPARATOR} {chunk}"));
                }
            } else {
                formatted.push(format!("{number} {SEPARATOR} {code}"));
            }

            if highlight_line == Some(line.number) {
                if let Some(last) = formatted.last_mut() {
                    last.push(' ');
                    last.push_str(HIGHLIGHT_MARKER);
                }
            }
        }

        formatted.join("\n")
    }

    /// Strips syntax-highlight spans and decodes entities so columns count visible characters.
    pub fn plain_code(code: &str) -> String {
        let stripped = SPAN_TAG.replace_all(code, "");
        decode_entities(&stripped).into_owned()
    }
}
