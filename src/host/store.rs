//! Process persistence abstraction

use crate::error::{Error, Result};
use crate::format::{read_document, write_document};
use crate::process::{Process, ProcessDocument};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Trait for committing a process record to the host's storage
pub trait ProcessStore: Send + Sync {
    /// Persist the current in-memory state of a process
    fn save_process(&self, process: &Process) -> Result<()>;
}

/// Store that rewrites the process document the process was loaded from
pub struct FileProcessStore {
    path: PathBuf,
}

impl FileProcessStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<ProcessDocument> {
        read_document(&self.path)
    }
}

impl ProcessStore for FileProcessStore {
    fn save_process(&self, process: &Process) -> Result<()> {
        let mut document = self.load()?;

        if document.process.id != process.id {
            return Err(Error::Persistence {
                process_id: process.id,
                reason: format!(
                    "{} holds process {}",
                    self.path.display(),
                    document.process.id
                ),
            });
        }

        document.process = process.clone();
        write_document(&self.path, &document)?;

        debug!("Saved process {} to {}", process.id, self.path.display());
        Ok(())
    }
}

/// Store that only reports what would have been saved
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunStore;

impl ProcessStore for DryRunStore {
    fn save_process(&self, process: &Process) -> Result<()> {
        info!(
            "Dry run: would save process {} with title '{}'",
            process.id, process.title
        );
        Ok(())
    }
}

/// Mock store recording saved processes
#[derive(Debug, Default, Clone)]
pub struct MockProcessStore {
    pub saved: Arc<Mutex<Vec<Process>>>,
    pub fail_with: Option<String>,
}

impl MockProcessStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every save fails with the given reason
    pub fn failing(reason: &str) -> Self {
        Self {
            saved: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(reason.to_string()),
        }
    }

    pub fn saved(&self) -> Vec<Process> {
        self.saved
            .lock()
            .map(|saved| saved.clone())
            .unwrap_or_default()
    }
}

impl ProcessStore for MockProcessStore {
    fn save_process(&self, process: &Process) -> Result<()> {
        if let Some(reason) = &self.fail_with {
            return Err(Error::Persistence {
                process_id: process.id,
                reason: reason.clone(),
            });
        }

        if let Ok(mut saved) = self.saved.lock() {
            saved.push(process.clone());
        }
        Ok(())
    }
}
