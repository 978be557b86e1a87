//! Capabilities the workflow host provides to step plugins
//!
//! Each host service is a trait so the step can run against the real host,
//! the file-backed implementations used by the CLI, or test doubles.

pub mod journal;
pub mod replacer;
pub mod store;

pub use journal::{FileJournal, JournalEntry, LogType, MockJournal, NullJournal, ProcessJournal};
pub use replacer::{
    ContextVariableReplacer, MetadataReplacerFactory, MockReplacerFactory, ReplacerFactory,
    VariableReplacer,
};
pub use store::{DryRunStore, FileProcessStore, MockProcessStore, ProcessStore};

use crate::config::PluginConfig;
use std::sync::Arc;

/// The set of host services a step plugin runs against
#[derive(Clone)]
pub struct StepHost {
    pub config: PluginConfig,
    pub replacers: Arc<dyn ReplacerFactory>,
    pub journal: Arc<dyn ProcessJournal>,
    pub store: Arc<dyn ProcessStore>,
}

impl StepHost {
    pub fn new(
        config: PluginConfig,
        replacers: Arc<dyn ReplacerFactory>,
        journal: Arc<dyn ProcessJournal>,
        store: Arc<dyn ProcessStore>,
    ) -> Self {
        Self {
            config,
            replacers,
            journal,
            store,
        }
    }
}
