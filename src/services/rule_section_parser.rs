use once_cell::sync::Lazy;
use regex::Regex;
use crate::enums::diff_type::DiffType;
use crate::enums::normalized_block::NormalizedBlock;
use crate::services::markup_normalizer;
use crate::structs::code_example::CodeExample;

const PRE_OPEN: &str = "<pre";
const PRE_CLOSE: &str = "</pre>";

static DIFF_TYPE_ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"data-diff-type\s*=\s*"([^"]*)""#).expect("valid pattern"));

pub struct RuleSectionParser;

impl RuleSectionParser {
    /// Splits one description section into normalized prose blocks and fenced code examples, in order.
    pub fn parse(content: &str) -> Vec<NormalizedBlock> {
        let mut parts = content.split(PRE_OPEN);
        let mut blocks = parts.next().map(markup_normalizer::normalize_to_blocks).unwrap_or_default();

        for part in parts {
            let Some((opening_tag, body)) = part.split_once('>') else {
                log::warn!("⚠️ Unterminated <pre> tag in rule description, skipping fragment");
                continue;
            };

            let (code, trailing) = body.split_once(PRE_CLOSE).unwrap_or((body, ""));
            let diff_type = DIFF_TYPE_ATTRIBUTE
                .captures(opening_tag)
                .and_then(|caps| DiffType::from_attribute(&caps[1]));

            if !code.trim().is_empty() {
                blocks.push(NormalizedBlock::Code(CodeExample {
                    diff_type,
                    code: code.to_string(),
                }));
            }
            blocks.extend(markup_normalizer::normalize_to_blocks(trailing));
        }

        blocks
    }

    pub fn code_examples(blocks: &[NormalizedBlock]) -> impl Iterator<Item = &CodeExample> {
        blocks.iter().filter_map(|block| match block {
            NormalizedBlock::Code(example) => Some(example),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separates_prose_from_diff_typed_examples() {
        let content = concat!(
            "<p>Replace the literal with a constant.</p>",
            "<pre data-diff-id=\"1\" data-diff-type=\"noncompliant\">\nfoo(\"x\");\nfoo(\"x\");\n</pre>",
            "<p>becomes</p>",
            "<pre data-diff-id=\"1\" data-diff-type=\"compliant\">\nfoo(X);\n</pre>",
        );

        let blocks = RuleSectionParser::parse(content);

        assert_eq!(blocks[0], NormalizedBlock::Paragraph("Replace the literal with a constant.".to_string()));
        assert!(matches!(&blocks[1], NormalizedBlock::Code(e) if e.diff_type == Some(DiffType::Noncompliant)));
        assert_eq!(blocks[2], NormalizedBlock::Paragraph("becomes".to_string()));
        assert!(matches!(&blocks[3], NormalizedBlock::Code(e) if e.diff_type == Some(DiffType::Compliant) && e.code.contains("foo(X);")));
        assert_eq!(blocks.len(), 4);
    }

    #[test]
    fn plain_pre_blocks_have_no_diff_type() {
        let blocks = RuleSectionParser::parse("<pre>\nx = 1\n</pre>");
        let examples: Vec<_> = RuleSectionParser::code_examples(&blocks).collect();
        assert_eq!(examples.len(), 1);
        assert_eq!(examples[0].diff_type, None);
    }
}
