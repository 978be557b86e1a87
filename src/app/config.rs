//! Application configuration
//!
//! Settings that shape a CLI invocation rather than the step itself.

use std::path::PathBuf;

/// Environment variable naming the plugin configuration directory
pub const CONFIG_DIR_ENV: &str = "RENAME_STEP_CONFIG_DIR";

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Directory holding `plugin_<title>` configuration files
    pub config_dir: PathBuf,
}

impl AppConfig {
    pub fn new(verbose: u8) -> Self {
        let mut config = Self {
            verbose,
            ..Self::default()
        };
        config.merge_env_vars();
        config
    }

    pub fn merge_env_vars(&mut self) {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            if !dir.is_empty() {
                self.config_dir = PathBuf::from(dir);
            }
        }
    }

    pub fn with_config_dir(mut self, dir: PathBuf) -> Self {
        self.config_dir = dir;
        self
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose: 0,
            config_dir: PathBuf::from("."),
        }
    }
}
