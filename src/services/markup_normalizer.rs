//! Turns rule-description HTML into text the PDF writer can lay out directly.
//!
//! The stages run in a fixed order: code spans are lifted out first so no later
//! stage can touch their content, and are put back only after the tag
//! whitelist and whitespace passes have run.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use crate::enums::normalized_block::NormalizedBlock;

pub const BULLET: char = '•';
const CODE_PLACEHOLDER_PREFIX: &str = "CODE_BLOCK_";
const INLINE_WHITELIST: [&str; 3] = ["b", "i", "font"];

static CODE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<code>(.*?)</code>").expect("valid pattern"));
static BLANK_LINES_IN_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n(?:[ \t]*\n)+").expect("valid pattern"));
static CODE_PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"CODE_BLOCK_(\d+)").expect("valid pattern"));
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<a\s+[^>]*>(.*?)</a>").expect("valid pattern"));
static STRUCTURAL_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?(?:para|div|span|a)\b[^>]*>").expect("valid pattern"));
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"<br\s*/?>").expect("valid pattern"));
static LIST_CONTAINER: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?(?:ul|ol)\b[^>]*>").expect("valid pattern"));
static LIST_ITEM_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<li\b[^>]*>").expect("valid pattern"));
static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<h[1-6]\b[^>]*>(.*?)</h[1-6]>").expect("valid pattern"));
static PARAGRAPH_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<p\b[^>]*>").expect("valid pattern"));
static ANY_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?([A-Za-z][A-Za-z0-9]*|!--)[^<>]*>").expect("valid pattern"));
static BLANK_LINE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n\s*\n").expect("valid pattern"));
static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").expect("valid pattern"));
static INDENT_AFTER_NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n +").expect("valid pattern"));
static BULLET_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"•\s*([^•\n]*)").expect("valid pattern"));
static BLOCK_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t]*\n").expect("valid pattern"));
static OPEN_INLINE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(b|i|font)(?:\s[^>]*)?>").expect("valid pattern"));
static CLOSE_INLINE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"</(b|i|font)>").expect("valid pattern"));

/// Runs every stage over `markup` and trims the result.
pub fn normalize(markup: &str) -> String {
    let (text, code_spans) = extract_code_spans(markup);
    let text = collapse_links(&text);
    let text = strip_structural_tags(&text);
    let text = normalize_breaks_and_lists(&text);
    let text = normalize_headings(&text);
    let text = map_paragraphs_and_emphasis(&text);
    let text = enforce_tag_whitelist(&text);
    let text = collapse_whitespace(&text);
    let text = refence_bullets(&text);
    let text = restore_code_spans(&text, &code_spans);
    let text = repair_tag_balance(&text);
    text.trim().to_string()
}

/// Stage 1: lifts `<code>` spans into a side table behind numbered placeholders.
pub fn extract_code_spans(text: &str) -> (String, Vec<String>) {
    let mut spans = Vec::new();
    let replaced = CODE_SPAN.replace_all(text, |caps: &Captures| {
        spans.push(caps[1].to_string());
        format!("{CODE_PLACEHOLDER_PREFIX}{}", spans.len() - 1)
    });
    (replaced.into_owned(), spans)
}

/// Stage 2: keeps only the text of hyperlinks.
pub fn collapse_links(text: &str) -> String {
    LINK.replace_all(text, "$1").into_owned()
}

/// Stage 3: drops container tags but keeps what they wrap.
pub fn strip_structural_tags(text: &str) -> String {
    STRUCTURAL_TAG.replace_all(text, "").into_owned()
}

/// Stage 4
pub fn normalize_breaks_and_lists(text: &str) -> String {
    let text = LINE_BREAK.replace_all(text, "\n");
    let text = LIST_CONTAINER.replace_all(&text, "\n");
    let text = LIST_ITEM_OPEN.replace_all(&text, format!("  {BULLET} ").as_str());
    text.replace("</li>", "\n")
}

/// Stage 5: headings become a bold run on their own line.
pub fn normalize_headings(text: &str) -> String {
    HEADING.replace_all(text, "\n\n<b>$1</b>\n").into_owned()
}

/// Stage 6
pub fn map_paragraphs_and_emphasis(text: &str) -> String {
    PARAGRAPH_OPEN
        .replace_all(text, "")
        .replace("</p>", "\n\n")
        .replace("<strong>", "<b>")
        .replace("</strong>", "</b>")
        .replace("<em>", "<i>")
        .replace("</em>", "</i>")
}

/// Stage 7: any tag outside the inline whitelist is removed.
pub fn enforce_tag_whitelist(text: &str) -> String {
    ANY_TAG
        .replace_all(text, |caps: &Captures| {
            if INLINE_WHITELIST.contains(&&caps[1]) {
                caps[0].to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}

/// Stage 8
pub fn collapse_whitespace(text: &str) -> String {
    let text = BLANK_LINE_RUN.replace_all(text, "\n\n");
    let text = SPACE_RUN.replace_all(&text, " ");
    INDENT_AFTER_NEWLINE.replace_all(&text, "\n").into_owned()
}

/// Stage 9: every bullet starts its own line and its text is trimmed.
pub fn refence_bullets(text: &str) -> String {
    let text = text.replace(&format!("{BULLET} "), &format!("\n{BULLET} "));
    BULLET_ITEM
        .replace_all(&text, |caps: &Captures| {
            let whole = caps.get(0).map_or(0..0, |m| m.range());
            let rest = &text[whole.end..];
            if rest.is_empty() || rest.starts_with('\n') {
                format!("{BULLET} {}", caps[1].trim())
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// Stage 10: placeholders get their original content back in a code font.
/// Blank lines inside a span are folded so the span stays within one block.
pub fn restore_code_spans(text: &str, spans: &[String]) -> String {
    CODE_PLACEHOLDER
        .replace_all(text, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| spans.get(index))
                .map_or_else(
                    || caps[0].to_string(),
                    |code| format!("<font face=\"Courier\">{}</font>", BLANK_LINES_IN_CODE.replace_all(code, "\n")),
                )
        })
        .into_owned()
}

/// Stage 11: appends closing tags for any whitelisted tag left open.
pub fn repair_tag_balance(text: &str) -> String {
    let mut repaired = text.to_string();
    for tag in INLINE_WHITELIST {
        let opened = OPEN_INLINE_TAG.captures_iter(text).filter(|c| &c[1] == tag).count();
        let closed = CLOSE_INLINE_TAG.captures_iter(text).filter(|c| &c[1] == tag).count();
        for _ in closed..opened {
            repaired.push_str(&format!("</{tag}>"));
        }
    }
    repaired
}

/// Splits normalized text into blocks at blank lines.
pub fn to_blocks(normalized: &str) -> Vec<NormalizedBlock> {
    let mut blocks = Vec::new();

    for chunk in BLOCK_SEPARATOR.split(normalized) {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }

        let (first_line, rest) = chunk.split_once('\n').map_or((chunk, ""), |(f, r)| (f.trim(), r.trim()));
        if is_single_bold_run(first_line) {
            blocks.push(NormalizedBlock::Emphasis(first_line.to_string()));
            if !rest.is_empty() {
                blocks.push(classify(rest));
            }
        } else {
            blocks.push(classify(chunk));
        }
    }

    blocks
}

/// `normalize` followed by `to_blocks`.
pub fn normalize_to_blocks(markup: &str) -> Vec<NormalizedBlock> {
    to_blocks(&normalize(markup))
}

fn is_single_bold_run(line: &str) -> bool {
    line.strip_prefix("<b>")
        .and_then(|l| l.strip_suffix("</b>"))
        .is_some_and(|inner| !inner.contains("<b>") && !inner.contains("</b>"))
}

fn classify(chunk: &str) -> NormalizedBlock {
    if chunk.starts_with(BULLET) {
        NormalizedBlock::Bullet(chunk.to_string())
    } else {
        NormalizedBlock::Paragraph(chunk.to_string())
    }
}
