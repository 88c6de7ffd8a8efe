use std::sync::{Mutex, Once};
use async_trait::async_trait;
use log::{Level, LevelFilter, Log, Metadata, Record};
use serde_json::{json, Value};
use sonar_report::config::constants::{ISSUES_SEARCH_ENDPOINT, MEASURES_COMPONENT_ENDPOINT, RULES_SHOW_ENDPOINT};
use sonar_report::traits::sonar_api::{JsonObject, QueryParams, SonarApi};

/// Records this crate's log lines so tests can assert on them.
struct CapturingLogger;

static CAPTURED: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
static INSTALL: Once = Once::new();
static LOGGER: CapturingLogger = CapturingLogger;

impl Log for CapturingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with("sonar_report")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            CAPTURED.lock().unwrap().push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

pub fn capture_logs() {
    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger in the test binary");
        log::set_max_level(LevelFilter::Debug);
    });
}

pub fn logged(level: Level, needle: &str) -> bool {
    CAPTURED.lock().unwrap().iter().any(|(l, message)| *l == level && message.contains(needle))
}

pub fn param<'a>(params: &'a QueryParams, name: &str) -> Option<&'a str> {
    params.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
}

pub fn object(value: Value) -> JsonObject {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

pub fn issue(key: &str, rule: &str, severity: &str) -> Value {
    json!({
        "key": key,
        "rule": rule,
        "severity": severity,
        "type": "CODE_SMELL",
        "message": format!("Message for {key}"),
        "component": format!("acme:shop:src/{key}.java"),
        "line": 7
    })
}

/// In-memory server: pages issues by `p`/`ps`, answers facets, measures and rules from fixtures.
pub struct ScriptedServer {
    pub issues: Vec<Value>,
    pub report_total: bool,
    /// Pages past this one come back empty, like a server refusing deep paging.
    pub last_page: Option<usize>,
    pub facets: Option<Value>,
    pub measures: Option<Value>,
    pub rules: Vec<Value>,
    pub calls: Mutex<Vec<(String, QueryParams)>>,
}

impl ScriptedServer {
    pub fn with_issues(issues: Vec<Value>) -> Self {
        Self {
            issues,
            report_total: true,
            last_page: None,
            facets: None,
            measures: None,
            rules: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls_to(&self, endpoint: &str) -> Vec<QueryParams> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(e, _)| e == endpoint)
            .map(|(_, p)| p.clone())
            .collect()
    }

    fn issues_page(&self, params: &QueryParams) -> JsonObject {
        if let Some(facets) = &self.facets {
            if param(params, "facets").is_some() {
                return object(json!({ "total": self.issues.len(), "issues": [], "facets": facets }));
            }
        }

        let page: usize = param(params, "p").and_then(|p| p.parse().ok()).unwrap_or(1);
        let size: usize = param(params, "ps").and_then(|p| p.parse().ok()).unwrap_or(100);
        if self.last_page.is_some_and(|last| page > last) {
            return JsonObject::new();
        }
        let start = (page - 1) * size;
        let slice: Vec<Value> = self.issues.iter().skip(start).take(size).cloned().collect();

        if self.report_total {
            object(json!({ "paging": { "pageIndex": page, "pageSize": size, "total": self.issues.len() }, "issues": slice }))
        } else {
            object(json!({ "issues": slice }))
        }
    }
}

#[async_trait]
impl SonarApi for ScriptedServer {
    async fn get(&self, endpoint: &str, params: &QueryParams) -> JsonObject {
        self.calls.lock().unwrap().push((endpoint.to_string(), params.clone()));

        match endpoint {
            ISSUES_SEARCH_ENDPOINT => self.issues_page(params),
            MEASURES_COMPONENT_ENDPOINT => self.measures.clone().map(object).unwrap_or_default(),
            RULES_SHOW_ENDPOINT => {
                let key = param(params, "key").unwrap_or_default();
                self.rules
                    .iter()
                    .find(|r| r["key"] == key)
                    .map(|rule| object(json!({ "rule": rule })))
                    .unwrap_or_default()
            }
            _ => JsonObject::new(),
        }
    }
}
