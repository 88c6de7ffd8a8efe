use serde::{Deserialize, Serialize};

pub const INTRODUCTION_SECTION: &str = "introduction";
pub const ROOT_CAUSE_SECTION: &str = "root_cause";
pub const HOW_TO_FIX_SECTION: &str = "how_to_fix";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RuleShowResponse {
    #[serde(default)]
    pub rule: Option<RuleDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RuleDetail {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "htmlDesc")]
    pub html_desc: Option<String>,
    #[serde(default, rename = "descriptionSections")]
    pub description_sections: Vec<DescriptionSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DescriptionSection {
    pub key: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub context: Option<SectionContext>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionContext {
    #[serde(default, rename = "displayName")]
    pub display_name: String,
    #[serde(default)]
    pub key: String,
}

impl RuleDetail {
    pub fn sections<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a DescriptionSection> + 'a {
        self.description_sections.iter().filter(move |s| s.key == key)
    }

    pub fn has_section(&self, key: &str) -> bool {
        self.sections(key).next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_rules_show_payload() {
        let response: RuleShowResponse = serde_json::from_value(serde_json::json!({
            "rule": {
                "key": "python:S1481",
                "name": "Unused local variables should be removed",
                "descriptionSections": [
                    { "key": "root_cause", "content": "<p>Dead code.</p>" },
                    {
                        "key": "how_to_fix",
                        "content": "<p>Remove it.</p>",
                        "context": { "displayName": "Django", "key": "django" }
                    }
                ]
            }
        }))
        .unwrap();

        let rule = response.rule.unwrap();
        assert!(rule.has_section(ROOT_CAUSE_SECTION));
        assert!(!rule.has_section(INTRODUCTION_SECTION));
        let fix = rule.sections(HOW_TO_FIX_SECTION).next().unwrap();
        assert_eq!(fix.context.as_ref().unwrap().display_name, "Django");
    }
}
