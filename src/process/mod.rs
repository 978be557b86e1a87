//! Process and step records handed to the plugin by the workflow host
//!
//! The host owns these entities. The plugin reads the process id and title,
//! and requests a title change through [`Process::change_process_title`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A unit of work tracked by the workflow engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub project: String,
    /// Free-form process properties, exposed as `{process.<name>}`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
    /// Metadata file, relative to the process document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_file: Option<PathBuf>,
}

impl Process {
    pub fn new(id: i32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            project: String::new(),
            properties: BTreeMap::new(),
            metadata_file: None,
        }
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn with_metadata_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.metadata_file = Some(path.into());
        self
    }

    pub fn change_process_title(&mut self, new_title: &str) {
        self.title = new_title.to_string();
    }
}

/// Identity of one workflow step, as stored in a process document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepInfo {
    pub id: i32,
    pub title: String,
}

/// A workflow step together with the process it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub id: i32,
    pub title: String,
    pub process: Process,
}

impl Step {
    pub fn new(id: i32, title: impl Into<String>, process: Process) -> Self {
        Self {
            id,
            title: title.into(),
            process,
        }
    }

    pub fn project_name(&self) -> &str {
        &self.process.project
    }
}

/// On-disk form of a process and the step being executed on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDocument {
    pub process: Process,
    pub step: StepInfo,
}

impl ProcessDocument {
    pub fn into_step(self) -> Step {
        Step::new(self.step.id, self.step.title, self.process)
    }
}
