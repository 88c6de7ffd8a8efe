use std::collections::BTreeMap;

/// Flat metric name to numeric-string map shown in the overview table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverviewMetrics {
    values: BTreeMap<String, String>,
}

impl OverviewMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, metric: impl Into<String>, value: impl Into<String>) {
        self.values.insert(metric.into(), value.into());
    }

    pub fn get(&self, metric: &str) -> Option<&str> {
        self.values.get(metric).map(String::as_str)
    }

    pub fn get_or_zero(&self, metric: &str) -> &str {
        self.get(metric).unwrap_or("0")
    }

    /// First present metric among `metrics`, else `"0"`.
    pub fn first_of_or_zero(&self, metrics: &[&str]) -> &str {
        metrics.iter().find_map(|m| self.get(m)).unwrap_or("0")
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_metrics_read_as_zero() {
        let mut overview = OverviewMetrics::new();
        overview.insert("issues_major", "4");
        overview.insert("bugs", "2");
        assert_eq!(overview.get_or_zero("issues_major"), "4");
        assert_eq!(overview.get_or_zero("issues_info"), "0");
        assert_eq!(overview.first_of_or_zero(&["issues_bug", "bugs"]), "2");
        assert_eq!(overview.first_of_or_zero(&["issues_vulnerability", "vulnerabilities"]), "0");
    }
}
