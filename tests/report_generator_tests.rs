use std::collections::HashSet;
use async_trait::async_trait;
use mockall::mock;
use serde_json::json;
use sonar_report::config::constants::{ISSUES_SEARCH_ENDPOINT, MEASURES_COMPONENT_ENDPOINT, RULES_SHOW_ENDPOINT};
use sonar_report::errors::ReportError;
use sonar_report::services::report_generator::ReportGenerator;
use sonar_report::structs::issue_record::IssueRecord;
use sonar_report::traits::sonar_api::{JsonObject, QueryParams, SonarApi};
use log::Level;
use crate::support::{capture_logs, issue, logged, object, param, ScriptedServer};

mock! {
    pub Api {}

    #[async_trait]
    impl SonarApi for Api {
        async fn get(&self, endpoint: &str, params: &QueryParams) -> JsonObject;
    }
}

#[tokio::test]
async fn empty_facet_response_skips_the_metrics_call() {
    let mut api = MockApi::new();
    api.expect_get()
        .withf(|endpoint, _| endpoint == ISSUES_SEARCH_ENDPOINT)
        .times(1)
        .returning(|_, _| JsonObject::new());
    api.expect_get()
        .withf(|endpoint, _| endpoint == MEASURES_COMPONENT_ENDPOINT)
        .times(0)
        .returning(|_, _| JsonObject::new());

    let overview = ReportGenerator::new(api).fetch_overview("acme").await.unwrap();

    assert!(overview.is_empty());
}

#[tokio::test]
async fn facet_counts_and_measures_are_merged() {
    let mut api = MockApi::new();
    api.expect_get()
        .withf(|endpoint, params| endpoint == ISSUES_SEARCH_ENDPOINT && param(params, "resolved") == Some("false"))
        .times(1)
        .returning(|_, _| {
            object(json!({
                "facets": [
                    { "property": "severities", "values": [{ "val": "BLOCKER", "count": 4 }, { "val": "MINOR", "count": 9 }] },
                    { "property": "types", "values": [{ "val": "CODE_SMELL", "count": 13 }] },
                    { "property": "sonarsourceSecurity", "values": [{ "val": "sql-injection", "count": 2 }] }
                ]
            }))
        });
    api.expect_get()
        .withf(|endpoint, _| endpoint == MEASURES_COMPONENT_ENDPOINT)
        .times(1)
        .returning(|_, _| object(json!({ "component": { "key": "acme", "measures": [{ "metric": "security_hotspots", "value": "3" }] } })));

    let overview = ReportGenerator::new(api).fetch_overview("acme").await.unwrap();

    assert_eq!(overview.get("issues_blocker"), Some("4"));
    assert_eq!(overview.get("issues_minor"), Some("9"));
    assert_eq!(overview.get("issues_code_smell"), Some("13"));
    assert_eq!(overview.get("security_hotspots"), Some("3"));
    assert_eq!(overview.get("issues_sql-injection"), None);
    assert_eq!(overview.get_or_zero("issues_critical"), "0");
}

#[tokio::test]
async fn malformed_facets_are_a_typed_error() {
    let mut api = MockApi::new();
    api.expect_get()
        .withf(|endpoint, _| endpoint == ISSUES_SEARCH_ENDPOINT)
        .returning(|_, _| object(json!({ "facets": "nope" })));

    let err = ReportGenerator::new(api).fetch_overview("acme").await.unwrap_err();

    assert!(matches!(err, ReportError::MalformedResponse { .. }));
}

#[tokio::test]
async fn paging_returns_every_issue_once_in_server_order() {
    let issues = (0..1234).map(|i| issue(&format!("I{i:04}"), "java:S1", "MAJOR")).collect();
    let server = ScriptedServer::with_issues(issues);
    let generator = ReportGenerator::new(server);

    let fetched = generator.fetch_all_issues("acme").await.unwrap();

    assert_eq!(fetched.len(), 1234);
    let keys: Vec<String> = fetched.iter().map(|i| i.key.clone()).collect();
    let expected: Vec<String> = (0..1234).map(|i| format!("I{i:04}")).collect();
    assert_eq!(keys, expected);
    assert_eq!(keys.iter().collect::<HashSet<_>>().len(), 1234);

    let pages: Vec<String> = generator
        .api()
        .calls_to(ISSUES_SEARCH_ENDPOINT)
        .iter()
        .map(|p| param(p, "p").unwrap_or_default().to_string())
        .collect();
    assert_eq!(pages, ["1", "2", "3"]);
    assert!(generator.api().calls_to(ISSUES_SEARCH_ENDPOINT).iter().all(|p| param(p, "ps") == Some("500")));
}

#[tokio::test]
async fn paging_without_a_total_stops_at_the_first_empty_page() {
    let issues = (0..600).map(|i| issue(&format!("K{i}"), "java:S1", "MINOR")).collect();
    let mut server = ScriptedServer::with_issues(issues);
    server.report_total = false;
    let generator = ReportGenerator::new(server);

    let fetched = generator.fetch_all_issues("acme").await.unwrap();

    assert_eq!(fetched.len(), 600);
    assert_eq!(generator.api().calls_to(ISSUES_SEARCH_ENDPOINT).len(), 3);
}

#[tokio::test]
async fn refused_deep_page_keeps_what_was_fetched_and_warns() {
    capture_logs();
    let issues = (0..1234).map(|i| issue(&format!("D{i}"), "java:S1", "MAJOR")).collect();
    let mut server = ScriptedServer::with_issues(issues);
    server.last_page = Some(2);
    let generator = ReportGenerator::new(server);

    let fetched = generator.fetch_all_issues("capped-project").await.unwrap();

    assert_eq!(fetched.len(), 1000);
    assert_eq!(generator.api().calls_to(ISSUES_SEARCH_ENDPOINT).len(), 3);
    assert!(logged(Level::Warn, "Issue paging for capped-project stopped at page 3 with 1000 of 1234 issues"));
}

#[tokio::test]
async fn issue_without_rule_is_rejected() {
    let server = ScriptedServer::with_issues(vec![json!({ "key": "X1", "rule": "  " })]);

    let err = ReportGenerator::new(server).fetch_all_issues("acme").await.unwrap_err();

    assert!(matches!(err, ReportError::MalformedResponse { .. }));
}

#[tokio::test]
async fn rule_details_are_fetched_once_per_rule() {
    let mut server = ScriptedServer::with_issues(Vec::new());
    server.rules = vec![json!({ "key": "java:S1", "name": "One" })];
    let generator = ReportGenerator::new(server);
    let issues: Vec<IssueRecord> = ["java:S1", "java:S2", "java:S1", "java:S1"]
        .iter()
        .enumerate()
        .map(|(i, rule)| serde_json::from_value(issue(&format!("I{i}"), rule, "MAJOR")).unwrap())
        .collect();

    let rules = generator.fetch_rules_for(&issues).await.unwrap();

    assert_eq!(generator.api().calls_to(RULES_SHOW_ENDPOINT).len(), 2);
    assert_eq!(rules["java:S1"].as_ref().map(|r| r.name.as_str()), Some("One"));
    assert!(rules["java:S2"].is_none());
}
