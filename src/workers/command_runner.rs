use std::path::PathBuf;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::errors::ReportResult;
use crate::logger::file_logger::FileLogger;
use crate::services::report_generator::ReportGenerator;
use crate::services::sonar_client::SonarQubeClient;
use crate::structs::cli::Cli;
use crate::structs::config::report_config::ReportConfig;
use crate::structs::config::settings_file::SettingsFile;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub const fn new() -> Self {
        Self { start_time: None }
    }

    /// Runs one report and returns the path it was written to.
    pub async fn run_command(&mut self, cli: Cli) -> ReportResult<PathBuf> {
        self.start_time = Some(Instant::now());

        let (settings, source) = ConfigManager::load(cli.config.as_deref())?;
        let config = Self::resolve_config(settings, &cli)?;
        FileLogger::install(&config.log_file)?;
        match source {
            Some(path) => log::debug!("📋 Loaded settings from: {}", path.display()),
            None => log::debug!("📋 No settings file found, using environment only"),
        }
        log::info!("🚀 Generating report for {} from {}", config.project_key, config.server_url);

        let client = SonarQubeClient::new(&config.server_url, &config.auth_token, config.timeout);
        let generator = ReportGenerator::new(client);
        let result = generator.generate_report(&config.project_key, &config.output_file).await;

        if let Some(start) = self.start_time {
            log::info!("⏱️  Report run finished in {:.2}s", start.elapsed().as_secs_f64());
        }

        match result {
            Ok(()) => Ok(config.output_file),
            Err(e) => {
                log::error!("❌ Error generating report: {}", e.technical_details());
                Err(e)
            }
        }
    }

    /// Command-line flags win over both the environment and the settings file.
    pub fn resolve_config(mut settings: SettingsFile, cli: &Cli) -> ReportResult<ReportConfig> {
        if let Some(project) = &cli.project {
            settings.project_key = Some(project.clone());
        }
        if let Some(output) = &cli.output {
            settings.output_file = Some(output.display().to_string());
        }
        ReportConfig::from_settings(settings)
    }
}
