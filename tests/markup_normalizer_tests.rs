use proptest::prelude::*;
use sonar_report::enums::normalized_block::NormalizedBlock;
use sonar_report::services::markup_normalizer::{normalize, normalize_to_blocks};

proptest! {
    #[test]
    fn plain_text_only_has_its_whitespace_collapsed(text in "[a-zA-Z0-9 .,]{1,80}") {
        let expected = text.split_whitespace().collect::<Vec<_>>().join(" ");
        prop_assert_eq!(normalize(&text), expected);
    }

    #[test]
    fn code_span_content_survives_verbatim(
        code in "[a-zA-Z0-9 =();.+*-]{1,40}",
        prefix in prop_oneof![Just("<p>Use "), Just("<ul><li>"), Just("<h2>Fix</h2><div>"), Just("")],
        suffix in prop_oneof![Just(" instead.</p>"), Just("</li></ul>"), Just("<br/>  <b>done"), Just("")],
    ) {
        let markup = format!("{prefix}<code>{code}</code>{suffix}");
        let normalized = normalize(&markup);
        let wrapped = format!("<font face=\"Courier\">{code}</font>");
        prop_assert!(normalized.contains(&wrapped), "{normalized:?} lost {code:?}");
    }
}

#[test]
fn two_unclosed_bold_tags_get_two_closers() {
    let normalized = normalize("<b>first <b>second");
    assert!(normalized.ends_with("second</b></b>"));
    assert_eq!(normalized.matches("</b>").count(), 2);
}

#[test]
fn rule_description_splits_into_heading_prose_and_bullets() {
    let html = concat!(
        "<h2>Why is this an issue?</h2>",
        "<p>Duplicated <strong>string literals</strong> make refactoring <a href=\"#\">error-prone</a>.</p>",
        "<ul><li>first</li><li>second</li></ul>",
    );

    let blocks = normalize_to_blocks(html);

    assert_eq!(blocks[0], NormalizedBlock::Emphasis("<b>Why is this an issue?</b>".to_string()));
    assert_eq!(
        blocks[1],
        NormalizedBlock::Paragraph("Duplicated <b>string literals</b> make refactoring error-prone.".to_string())
    );
    assert_eq!(blocks[2], NormalizedBlock::Bullet("• first".to_string()));
    assert_eq!(blocks[3], NormalizedBlock::Bullet("• second".to_string()));
}
