use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Blocker,
    Critical,
    #[default]
    Major,
    Minor,
    Info,
    #[serde(other)]
    Unknown,
}

impl Severity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blocker => "BLOCKER",
            Self::Critical => "CRITICAL",
            Self::Major => "MAJOR",
            Self::Minor => "MINOR",
            Self::Info => "INFO",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Banner colors as (accent, text-on-accent).
    pub const fn colors(self) -> (&'static str, &'static str) {
        match self {
            Self::Blocker => ("#DC3545", "#FFFFFF"),
            Self::Critical => ("#E94F37", "#FFFFFF"),
            Self::Major => ("#FFA500", "#000000"),
            Self::Minor => ("#FFC107", "#000000"),
            Self::Info => ("#28A745", "#FFFFFF"),
            Self::Unknown => ("#666666", "#FFFFFF"),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
