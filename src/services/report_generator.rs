use std::collections::HashMap;
use std::path::Path;
use chrono::Local;
use serde::de::DeserializeOwned;
use serde_json::Value;
use crate::config::constants::{
    ISSUES_PAGE_SIZE, ISSUES_SEARCH_ENDPOINT, MEASURES_COMPONENT_ENDPOINT, OVERVIEW_FACETS,
    OVERVIEW_METRIC_KEYS, RULES_SHOW_ENDPOINT,
};
use crate::errors::{ReportError, ReportResult};
use crate::services::document_renderer::DocumentRenderer;
use crate::services::pdf_writer::PdfWriter;
use crate::structs::issue_record::IssueRecord;
use crate::structs::issue_search_response::{Facet, IssueSearchResponse};
use crate::structs::measures_response::MeasuresResponse;
use crate::structs::overview_metrics::OverviewMetrics;
use crate::structs::rule_detail::{RuleDetail, RuleShowResponse};
use crate::traits::sonar_api::{query, JsonObject, SonarApi};

const COUNTED_FACETS: [&str; 2] = ["severities", "types"];

/// Collects overview metrics, issues and rule descriptions and hands them to the renderer.
pub struct ReportGenerator<A: SonarApi> {
    api: A,
}

impl<A: SonarApi> ReportGenerator<A> {
    pub const fn new(api: A) -> Self {
        Self { api }
    }

    pub const fn api(&self) -> &A {
        &self.api
    }

    pub async fn fetch_overview(&self, project_key: &str) -> ReportResult<OverviewMetrics> {
        let mut overview = OverviewMetrics::new();

        let issues_data = self
            .api
            .get(
                ISSUES_SEARCH_ENDPOINT,
                &query(&[
                    ("componentKeys", project_key),
                    ("facets", OVERVIEW_FACETS),
                    ("resolved", "false"),
                ]),
            )
            .await;
        if issues_data.is_empty() {
            log::warn!("⚠️ No issue facets returned for {project_key}, skipping overview metrics");
            return Ok(overview);
        }

        let facets: Vec<Facet> = match issues_data.get("facets") {
            Some(value) => Self::decode(ISSUES_SEARCH_ENDPOINT, value.clone())?,
            None => Vec::new(),
        };
        for facet in facets.iter().filter(|f| COUNTED_FACETS.contains(&f.property.as_str())) {
            for value in &facet.values {
                overview.insert(format!("issues_{}", value.val.to_lowercase()), value.count.to_string());
            }
        }

        let metrics_data = self
            .api
            .get(
                MEASURES_COMPONENT_ENDPOINT,
                &query(&[("component", project_key), ("metricKeys", OVERVIEW_METRIC_KEYS)]),
            )
            .await;
        if !metrics_data.is_empty() {
            let measures: MeasuresResponse = Self::decode_object(MEASURES_COMPONENT_ENDPOINT, metrics_data)?;
            for measure in measures.component.into_iter().flat_map(|c| c.measures) {
                if let Some(value) = measure.value {
                    overview.insert(measure.metric, value);
                }
            }
        }

        log::debug!("📊 Overview for {project_key}: {} metrics", overview.len());
        for (metric, value) in overview.iter() {
            log::debug!("   {metric} = {value}");
        }
        Ok(overview)
    }

    pub async fn fetch_all_issues(&self, project_key: &str) -> ReportResult<Vec<IssueRecord>> {
        let page_size = ISSUES_PAGE_SIZE.to_string();
        let mut all_issues: Vec<IssueRecord> = Vec::new();
        let mut page: usize = 1;
        let mut total: Option<u64> = None;

        loop {
            let data = self
                .api
                .get(
                    ISSUES_SEARCH_ENDPOINT,
                    &query(&[
                        ("componentKeys", project_key),
                        ("ps", page_size.as_str()),
                        ("p", page.to_string().as_str()),
                    ]),
                )
                .await;
            if data.is_empty() {
                break;
            }

            let response: IssueSearchResponse = Self::decode_object(ISSUES_SEARCH_ENDPOINT, data)?;
            if response.issues.is_empty() {
                break;
            }

            if let Some(issue) = response.issues.iter().find(|i| i.rule.trim().is_empty()) {
                return Err(ReportError::malformed_response(
                    ISSUES_SEARCH_ENDPOINT,
                    &format!("issue '{}' has no rule identifier", issue.key),
                ));
            }

            total = response.reported_total().or(total);
            all_issues.extend(response.issues);
            log::debug!("📥 Page {page}: {} issues so far (total {total:?})", all_issues.len());

            if total.is_some_and(|t| all_issues.len() as u64 >= t) {
                break;
            }
            page += 1;
        }

        if let Some(total) = total.filter(|t| (all_issues.len() as u64) < *t) {
            log::warn!(
                "⚠️ Issue paging for {project_key} stopped at page {page} with {} of {total} issues; the report is incomplete",
                all_issues.len()
            );
        }

        log::info!("🔍 Fetched {} issues for {project_key}", all_issues.len());
        Ok(all_issues)
    }

    pub async fn fetch_rule_details(&self, rule_key: &str) -> ReportResult<Option<RuleDetail>> {
        let data = self.api.get(RULES_SHOW_ENDPOINT, &query(&[("key", rule_key)])).await;
        if data.is_empty() {
            return Ok(None);
        }

        let response: RuleShowResponse = Self::decode_object(RULES_SHOW_ENDPOINT, data)?;
        Ok(response.rule)
    }

    /// One lookup per distinct rule, in order of first appearance.
    pub async fn fetch_rules_for(&self, issues: &[IssueRecord]) -> ReportResult<HashMap<String, Option<RuleDetail>>> {
        let mut rules = HashMap::new();
        for issue in issues {
            if !rules.contains_key(&issue.rule) {
                let detail = self.fetch_rule_details(&issue.rule).await?;
                if detail.is_none() {
                    log::warn!("⚠️ No details available for rule {}", issue.rule);
                }
                rules.insert(issue.rule.clone(), detail);
            }
        }
        Ok(rules)
    }

    pub async fn generate_report(&self, project_key: &str, output_path: &Path) -> ReportResult<()> {
        let overview = self.fetch_overview(project_key).await?;
        let issues = self.fetch_all_issues(project_key).await?;
        let rules = self.fetch_rules_for(&issues).await?;

        let renderer = DocumentRenderer::new(Local::now());
        let elements = renderer.render(project_key, &overview, &issues, |key| {
            rules.get(key).and_then(Option::as_ref)
        });
        PdfWriter::default().write(&elements, output_path)?;

        log::info!("Report generated successfully for project: {project_key}");
        Ok(())
    }

    fn decode_object<T: DeserializeOwned>(endpoint: &str, data: JsonObject) -> ReportResult<T> {
        Self::decode(endpoint, Value::Object(data))
    }

    fn decode<T: DeserializeOwned>(endpoint: &str, value: Value) -> ReportResult<T> {
        serde_json::from_value(value).map_err(|e| ReportError::malformed_response(endpoint, &e.to_string()))
    }
}
