use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use env_logger::{Builder, Env, Target};
use crate::config::constants::{DEFAULT_LOG_FILTER, LOGGER_NAME};
use crate::errors::{ReportError, ReportResult};

pub struct FileLogger;

impl FileLogger {
    /// Routes the `log` facade into `path`, appending. Level comes from `RUST_LOG`,
    /// default `sonar_report=debug`.
    pub fn install(path: &Path) -> ReportResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| ReportError::file_error(&parent.display().to_string(), "create directory", &e.to_string()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| ReportError::file_error(&path.display().to_string(), "open log file", &e.to_string()))?;

        let installed = Self::builder(Env::default().default_filter_or(DEFAULT_LOG_FILTER), Target::Pipe(Box::new(file)))
            .try_init();

        // A second install in the same process keeps the first logger.
        if installed.is_err() {
            log::debug!("Logger already installed, keeping existing target");
        }
        Ok(())
    }

    fn builder(env: Env<'_>, target: Target) -> Builder {
        let mut builder = Builder::from_env(env);
        builder.target(target).format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
                LOGGER_NAME,
                record.level(),
                record.args()
            )
        });
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Metadata};

    fn enabled(logger: &env_logger::Logger, target: &str, level: Level) -> bool {
        logger.enabled(&Metadata::builder().target(target).level(level).build())
    }

    #[test]
    fn default_filter_keeps_only_this_crate() {
        let env = Env::new().filter("SONAR_REPORT_UNSET_LOG_FILTER").default_filter_or(DEFAULT_LOG_FILTER);
        let logger = FileLogger::builder(env, Target::Pipe(Box::new(std::io::sink()))).build();

        assert!(enabled(&logger, "sonar_report::services::sonar_client", Level::Debug));
        assert!(!enabled(&logger, "sonar_report::services::sonar_client", Level::Trace));
        assert!(!enabled(&logger, "hyper_util::client::legacy::pool", Level::Debug));
        assert!(!enabled(&logger, "reqwest::connect", Level::Info));
    }
}
