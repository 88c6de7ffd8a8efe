use once_cell::sync::Lazy;
use regex::Regex;
use crate::helpers::html_entities::decode_entities;
use crate::structs::rgb::Rgb;

static INLINE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(/?)(b|i|font|br)\b([^<>]*?)/?>").expect("valid pattern"));
static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(\w+)\s*=\s*"([^"]*)""#).expect("valid pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunStyle {
    pub bold: bool,
    pub italic: bool,
    pub monospace: bool,
    pub color: Option<Rgb>,
    pub size: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InlineItem {
    Text { text: String, style: RunStyle },
    LineBreak,
}

#[derive(Debug, Clone, Copy, Default)]
struct FontFrame {
    color: Option<Rgb>,
    size: Option<f32>,
    monospace: bool,
}

/// Parses paragraph markup into styled runs. Anything that is not a known inline tag is text.
pub fn parse(markup: &str) -> Vec<InlineItem> {
    let mut items = Vec::new();
    let mut bold_depth = 0usize;
    let mut italic_depth = 0usize;
    let mut fonts: Vec<FontFrame> = Vec::new();
    let mut cursor = 0;

    let current_style = |bold: usize, italic: usize, fonts: &[FontFrame]| RunStyle {
        bold: bold > 0,
        italic: italic > 0,
        monospace: fonts.iter().any(|f| f.monospace),
        color: fonts.iter().rev().find_map(|f| f.color),
        size: fonts.iter().rev().find_map(|f| f.size),
    };

    for caps in INLINE_TAG.captures_iter(markup) {
        let Some(whole) = caps.get(0) else { continue };
        push_text(&mut items, &markup[cursor..whole.start()], current_style(bold_depth, italic_depth, &fonts));
        cursor = whole.end();

        let closing = !caps[1].is_empty();
        match (&caps[2], closing) {
            ("br", _) => items.push(InlineItem::LineBreak),
            ("b", false) => bold_depth += 1,
            ("b", true) => bold_depth = bold_depth.saturating_sub(1),
            ("i", false) => italic_depth += 1,
            ("i", true) => italic_depth = italic_depth.saturating_sub(1),
            ("font", false) => fonts.push(font_frame(&caps[3])),
            ("font", true) => {
                fonts.pop();
            }
            _ => {}
        }
    }
    push_text(&mut items, &markup[cursor..], current_style(bold_depth, italic_depth, &fonts));

    items
}

/// Escapes text so it survives as literal content inside paragraph markup.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn push_text(items: &mut Vec<InlineItem>, raw: &str, style: RunStyle) {
    if raw.is_empty() {
        return;
    }
    let text = decode_entities(raw).into_owned();
    if let Some(InlineItem::Text { text: previous, style: previous_style }) = items.last_mut() {
        if *previous_style == style {
            previous.push_str(&text);
            return;
        }
    }
    items.push(InlineItem::Text { text, style });
}

fn font_frame(attributes: &str) -> FontFrame {
    let mut frame = FontFrame::default();
    for caps in ATTRIBUTE.captures_iter(attributes) {
        match caps[1].to_ascii_lowercase().as_str() {
            "color" => frame.color = Rgb::parse(&caps[2]),
            "size" => frame.size = caps[2].trim().parse().ok(),
            "face" => frame.monospace = caps[2].to_ascii_lowercase().contains("courier"),
            _ => {}
        }
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(items: &[InlineItem]) -> Vec<(String, bool, bool)> {
        items
            .iter()
            .filter_map(|item| match item {
                InlineItem::Text { text, style } => Some((text.clone(), style.bold, style.monospace)),
                InlineItem::LineBreak => None,
            })
            .collect()
    }

    #[test]
    fn nested_styles_and_breaks() {
        let items = parse(r#"<b>File:</b> a&lt;b&gt;<br/><font face="Courier">x()</font>"#);
        assert_eq!(
            texts(&items),
            vec![
                ("File:".to_string(), true, false),
                (" a<b>".to_string(), false, false),
                ("x()".to_string(), false, true),
            ]
        );
        assert!(items.contains(&InlineItem::LineBreak));
    }

    #[test]
    fn font_attributes_are_applied_and_popped() {
        let items = parse(r##"<font color="#FF0000" size="20">big</font>small"##);
        match (&items[0], &items[1]) {
            (InlineItem::Text { style: big, .. }, InlineItem::Text { style: small, .. }) => {
                assert_eq!(big.size, Some(20.0));
                assert_eq!(big.color, Rgb::parse("#FF0000"));
                assert_eq!(*small, RunStyle::default());
            }
            other => panic!("unexpected items {other:?}"),
        }
    }

    #[test]
    fn stray_angle_brackets_are_text() {
        assert_eq!(texts(&parse("a < b")), vec![("a < b".to_string(), false, false)]);
    }

    #[test]
    fn escape_round_trips_through_parse() {
        let original = "Map<K, V> & more";
        assert_eq!(texts(&parse(&escape(original))), vec![(original.to_string(), false, false)]);
    }
}
