//! Process journal abstraction
//!
//! The journal is the per-process message log the workflow host shows to
//! users. Writing to it never fails from the caller's point of view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Severity of a journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogType {
    Error,
    Warn,
    Info,
    Debug,
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogType::Error => "error",
            LogType::Warn => "warn",
            LogType::Info => "info",
            LogType::Debug => "debug",
        };
        f.write_str(name)
    }
}

/// Trait for the host's process journal
pub trait ProcessJournal: Send + Sync {
    /// Append a message to the journal of a process
    fn add_message(&self, process_id: i32, log_type: LogType, message: &str);
}

/// One journal line as written by [`FileJournal`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub timestamp: DateTime<Utc>,
    pub process_id: i32,
    #[serde(rename = "type")]
    pub log_type: LogType,
    pub content: String,
}

/// Journal that appends JSON lines to a file
pub struct FileJournal {
    path: PathBuf,
}

impl FileJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, entry: &JournalEntry) -> anyhow::Result<()> {
        let line = serde_json::to_string(entry)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}

impl ProcessJournal for FileJournal {
    fn add_message(&self, process_id: i32, log_type: LogType, message: &str) {
        let entry = JournalEntry {
            timestamp: Utc::now(),
            process_id,
            log_type,
            content: message.to_string(),
        };

        if let Err(e) = self.append(&entry) {
            warn!(
                "Failed to write journal entry to {}: {}",
                self.path.display(),
                e
            );
        }
    }
}

/// Journal that drops every message, for hosts without a journal
#[derive(Debug, Default, Clone, Copy)]
pub struct NullJournal;

impl ProcessJournal for NullJournal {
    fn add_message(&self, _process_id: i32, _log_type: LogType, _message: &str) {}
}

/// Mock journal recording every message for verification
#[derive(Debug, Default, Clone)]
pub struct MockJournal {
    pub messages: Arc<Mutex<Vec<(i32, LogType, String)>>>,
}

impl MockJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded messages in order
    pub fn messages(&self) -> Vec<(i32, LogType, String)> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }

    /// Recorded messages of one severity
    pub fn messages_of(&self, log_type: LogType) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(_, t, _)| *t == log_type)
            .map(|(_, _, message)| message)
            .collect()
    }
}

impl ProcessJournal for MockJournal {
    fn add_message(&self, process_id: i32, log_type: LogType, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push((process_id, log_type, message.to_string()));
        }
    }
}
