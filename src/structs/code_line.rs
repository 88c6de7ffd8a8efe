#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeLine {
    pub number: usize,
    pub code: String,
}

impl CodeLine {
    /// Numbers lines from 1 after trimming surrounding blank space.
    pub fn from_snippet(snippet: &str) -> Vec<Self> {
        snippet
            .trim()
            .split('\n')
            .enumerate()
            .map(|(i, line)| Self {
                number: i + 1,
                code: line.trim_end_matches('\r').to_string(),
            })
            .collect()
    }
}
