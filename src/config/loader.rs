use super::PluginConfig;
use crate::error::Result;
use crate::format::read_document;
use std::path::{Path, PathBuf};
use tracing::debug;

const EXTENSIONS: [&str; 3] = ["toml", "yaml", "yml"];

/// Locates and parses plugin configuration files in a configuration directory
pub struct ConfigLoader {
    config_dir: PathBuf,
}

impl ConfigLoader {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path of the configuration file for a plugin, if one exists.
    ///
    /// Tries `plugin_<title>.toml`, `.yaml` and `.yml` in that order.
    pub fn plugin_config_path(&self, plugin_title: &str) -> Option<PathBuf> {
        EXTENSIONS
            .iter()
            .map(|ext| {
                self.config_dir
                    .join(format!("plugin_{plugin_title}.{ext}"))
            })
            .find(|path| path.is_file())
    }

    /// Load the configuration for a plugin. A missing file is an empty configuration.
    pub fn load_plugin(&self, plugin_title: &str) -> Result<PluginConfig> {
        match self.plugin_config_path(plugin_title) {
            Some(path) => Self::load_file(&path),
            None => {
                debug!(
                    "No configuration for plugin {} in {}",
                    plugin_title,
                    self.config_dir.display()
                );
                Ok(PluginConfig::default())
            }
        }
    }

    pub fn load_file(path: &Path) -> Result<PluginConfig> {
        debug!("Loading plugin configuration from {}", path.display());
        read_document(path)
    }
}
