pub mod settings_file;
pub mod report_config;
