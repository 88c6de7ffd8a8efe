pub mod cli;
pub mod config;
pub mod code_example;
pub mod code_line;
pub mod issue_record;
pub mod issue_search_response;
pub mod measures_response;
pub mod overview_metrics;
pub mod rgb;
pub mod rule_detail;
pub mod style_spec;
