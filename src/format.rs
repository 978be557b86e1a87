//! File format detection for configuration and process documents
//!
//! Formats are chosen by file extension. Everything read by this crate is
//! plain serde data, so one parse/render pair covers all three formats.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Yaml,
    Json,
}

impl FileFormat {
    /// Detect the format from a path's extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(FileFormat::Toml),
            Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
            Some("json") => Ok(FileFormat::Json),
            _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn parse<T: DeserializeOwned>(&self, content: &str) -> Result<T> {
        let value = match self {
            FileFormat::Toml => toml::from_str(content)?,
            FileFormat::Yaml => serde_yaml::from_str(content)?,
            FileFormat::Json => serde_json::from_str(content)?,
        };
        Ok(value)
    }

    pub fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let content = match self {
            FileFormat::Toml => toml::to_string_pretty(value)?,
            FileFormat::Yaml => serde_yaml::to_string(value)?,
            FileFormat::Json => serde_json::to_string_pretty(value)?,
        };
        Ok(content)
    }
}

/// Read and deserialize a file, picking the parser from its extension
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = FileFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    format
        .parse(&content)
        .map_err(|e| Error::config(path, e))
}

/// Serialize and write a file atomically (temp file, then rename)
pub fn write_document<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let format = FileFormat::from_path(path)?;
    let content = format.render(value)?;

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_file = Path::new(&temp_name);

    fs::write(temp_file, content)?;
    fs::rename(temp_file, path)?;

    Ok(())
}
