use crate::enums::diff_type::DiffType;

/// A fenced example from a rule description, still in raw server markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeExample {
    /// `None` for a plain `<pre>` block without a diff-type attribute.
    pub diff_type: Option<DiffType>,
    pub code: String,
}
