use crate::config::constants::{DEFAULT_LOG_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_TIMEOUT_SECS};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_output_file() -> String {
        DEFAULT_OUTPUT_FILE.to_string()
    }

    pub fn default_log_file() -> String {
        DEFAULT_LOG_FILE.to_string()
    }

    pub const fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }
}
