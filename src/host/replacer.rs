//! Workflow variable resolution
//!
//! Resolves `{name}` tokens against a process and its current step. Tokens the
//! replacer does not know are left untouched so the caller can report them.
//!
//! Vocabulary of [`ContextVariableReplacer::for_step`]:
//! - `{processtitle}`, `{processid}`, `{projectname}`
//! - `{stepname}`, `{stepid}`
//! - `{meta.<Name>}` for entries of the process metadata file
//! - `{process.<Name>}` for process properties

use crate::error::{Error, Result};
use crate::format::read_document;
use crate::process::Step;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::{debug, trace};

/// Regex for a single `{token}` without nested braces
static TOKEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^{}]+)\}").expect("Valid regex pattern"));

/// Trait for resolving workflow variables in a string
pub trait VariableReplacer: Send + Sync {
    fn replace(&self, input: &str) -> String;
}

/// Trait for building a replacer bound to one process/step
pub trait ReplacerFactory: Send + Sync {
    /// Build a replacer for the step. Fails when the process metadata cannot be read.
    fn replacer_for(&self, step: &Step) -> Result<Box<dyn VariableReplacer>>;
}

/// Replacer backed by a table of resolved variable names
#[derive(Debug, Clone, Default)]
pub struct ContextVariableReplacer {
    variables: BTreeMap<String, String>,
}

impl ContextVariableReplacer {
    pub fn new(variables: BTreeMap<String, String>) -> Self {
        Self { variables }
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Variables derived from the step, its process and the process metadata
    pub fn for_step(step: &Step, metadata: &BTreeMap<String, Value>) -> Self {
        let process = &step.process;
        let mut variables = BTreeMap::new();

        variables.insert("processtitle".to_string(), process.title.clone());
        variables.insert("processid".to_string(), process.id.to_string());
        variables.insert("projectname".to_string(), process.project.clone());
        variables.insert("stepname".to_string(), step.title.clone());
        variables.insert("stepid".to_string(), step.id.to_string());

        for (name, value) in &process.properties {
            variables.insert(format!("process.{name}"), value.clone());
        }
        for (name, value) in metadata {
            variables.insert(format!("meta.{name}"), value_to_string(value));
        }

        Self { variables }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }
}

impl VariableReplacer for ContextVariableReplacer {
    fn replace(&self, input: &str) -> String {
        TOKEN_REGEX
            .replace_all(input, |caps: &Captures| match self.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => {
                    trace!("Leaving unknown variable {{{}}} in place", &caps[1]);
                    caps[0].to_string()
                }
            })
            .into_owned()
    }
}

/// Convert a metadata value to the text substituted into a template
fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// Factory reading each process's metadata file from disk
pub struct MetadataReplacerFactory {
    base_dir: PathBuf,
}

impl MetadataReplacerFactory {
    /// `base_dir` is the directory metadata file paths are relative to
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn read_metadata(&self, step: &Step) -> Result<BTreeMap<String, Value>> {
        let Some(file) = &step.process.metadata_file else {
            debug!("Process {} has no metadata file", step.process.id);
            return Ok(BTreeMap::new());
        };

        let path = self.base_dir.join(file);
        read_document(&path).map_err(|e| Error::Metadata {
            process_id: step.process.id,
            reason: format!("{}: {}", path.display(), e),
        })
    }
}

impl ReplacerFactory for MetadataReplacerFactory {
    fn replacer_for(&self, step: &Step) -> Result<Box<dyn VariableReplacer>> {
        let metadata = self.read_metadata(step)?;
        Ok(Box::new(ContextVariableReplacer::for_step(step, &metadata)))
    }
}

/// Mock factory handing out a fixed variable table, or failing
#[derive(Debug, Clone, Default)]
pub struct MockReplacerFactory {
    pub variables: BTreeMap<String, String>,
    pub fail_with: Option<String>,
    /// Step ids the factory was asked for
    pub requests: Arc<Mutex<Vec<i32>>>,
}

impl MockReplacerFactory {
    pub fn with_variables<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            variables: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            fail_with: Some(reason.to_string()),
            ..Self::default()
        }
    }

    pub fn requests(&self) -> Vec<i32> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl ReplacerFactory for MockReplacerFactory {
    fn replacer_for(&self, step: &Step) -> Result<Box<dyn VariableReplacer>> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(step.id);
        }

        if let Some(reason) = &self.fail_with {
            return Err(Error::Metadata {
                process_id: step.process.id,
                reason: reason.clone(),
            });
        }

        Ok(Box::new(ContextVariableReplacer::new(self.variables.clone())))
    }
}
