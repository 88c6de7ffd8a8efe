use serde::{Deserialize, Serialize};

/// Marks an embedded rule example as the violating or the corrected pattern.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum DiffType {
    Noncompliant,
    Compliant,
}

impl DiffType {
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::Noncompliant => "noncompliant",
            Self::Compliant => "compliant",
        }
    }

    pub fn from_attribute(value: &str) -> Option<Self> {
        let value = value.trim();
        [Self::Noncompliant, Self::Compliant]
            .into_iter()
            .find(|diff_type| diff_type.attribute().eq_ignore_ascii_case(value))
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Noncompliant => "Noncompliant Code Example:",
            Self::Compliant => "Compliant Solution:",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Noncompliant => "#DC3545",
            Self::Compliant => "#28A745",
        }
    }
}
