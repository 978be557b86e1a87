//! Common test utilities and helpers
#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const PLUGIN_CONFIG_FILE: &str = "plugin_intranda_step_rename_process.toml";

/// Builder for a workspace holding a process document, metadata and plugin configuration
pub struct ProcessFixtureBuilder {
    temp_dir: TempDir,
    process_id: i32,
    title: String,
    project: String,
    step_title: String,
    metadata: Option<String>,
    metadata_missing: bool,
    template: Option<String>,
}

impl ProcessFixtureBuilder {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
            process_id: 42,
            title: "old_title".to_string(),
            project: "Manuscripts".to_string(),
            step_title: "Rename process".to_string(),
            metadata: None,
            metadata_missing: false,
            template: None,
        })
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Write `meta.yaml` next to the process document and reference it
    pub fn with_metadata(mut self, yaml: &str) -> Self {
        self.metadata = Some(yaml.to_string());
        self
    }

    /// Reference a metadata file without creating it
    pub fn with_missing_metadata(mut self) -> Self {
        self.metadata = None;
        self.metadata_missing = true;
        self
    }

    /// Write a plugin configuration with one wildcard block using this template
    pub fn with_template(mut self, template: &str) -> Self {
        self.template = Some(template.to_string());
        self
    }

    pub fn build(self) -> Result<ProcessFixture> {
        let root = self.temp_dir.path().to_path_buf();
        let config_dir = root.join("config");
        fs::create_dir_all(&config_dir)?;

        let metadata_line = if self.metadata.is_some() || self.metadata_missing {
            "  metadata_file: meta.yaml\n"
        } else {
            ""
        };
        if let Some(metadata) = &self.metadata {
            fs::write(root.join("meta.yaml"), metadata)?;
        }

        let process_file = root.join("process.yaml");
        fs::write(
            &process_file,
            format!(
                "process:\n  id: {}\n  title: {}\n  project: {}\n{}step:\n  id: 3\n  title: {}\n",
                self.process_id, self.title, self.project, metadata_line, self.step_title
            ),
        )?;

        if let Some(template) = &self.template {
            fs::write(
                config_dir.join(PLUGIN_CONFIG_FILE),
                format!(
                    "[[config]]\nproject = [\"*\"]\nstep = [\"*\"]\nnewProcessTitle = {}\n",
                    toml_string(template)
                ),
            )?;
        }

        Ok(ProcessFixture {
            _temp_dir: self.temp_dir,
            root,
            config_dir,
            process_file,
        })
    }
}

/// A prepared workspace; files live as long as the fixture
pub struct ProcessFixture {
    _temp_dir: TempDir,
    pub root: PathBuf,
    pub config_dir: PathBuf,
    pub process_file: PathBuf,
}

impl ProcessFixture {
    pub fn journal_file(&self) -> PathBuf {
        self.root.join("journal.jsonl")
    }

    pub fn process_document(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.process_file)?)
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

fn toml_string(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}
