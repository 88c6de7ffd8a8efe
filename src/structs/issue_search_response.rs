use serde::{Deserialize, Serialize};
use crate::structs::issue_record::IssueRecord;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IssueSearchResponse {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub paging: Option<Paging>,
    #[serde(default)]
    pub issues: Vec<IssueRecord>,
    #[serde(default)]
    pub facets: Vec<Facet>,
}

impl IssueSearchResponse {
    /// Older servers report `total` at the top level, newer ones under `paging`.
    pub fn reported_total(&self) -> Option<u64> {
        self.total.or_else(|| self.paging.as_ref().map(|p| p.total))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Paging {
    #[serde(default, rename = "pageIndex")]
    pub page_index: u64,
    #[serde(default, rename = "pageSize")]
    pub page_size: u64,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facet {
    pub property: String,
    #[serde(default)]
    pub values: Vec<FacetValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacetValue {
    pub val: String,
    pub count: u64,
}
