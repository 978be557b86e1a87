//! Run command implementation
//!
//! Drives the rename step against a process document on disk, with the
//! file-backed host services.

use crate::app::AppConfig;
use crate::config::ConfigLoader;
use crate::host::{
    DryRunStore, FileJournal, FileProcessStore, MetadataReplacerFactory, NullJournal,
    ProcessJournal, ProcessStore, StepHost,
};
use crate::step::{PluginReturnValue, RenameProcessStep, StepPlugin, PLUGIN_TITLE};
use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Options of the `run` command
#[derive(Debug, Clone)]
pub struct RunCommand {
    pub process: PathBuf,
    pub config: Option<PathBuf>,
    pub config_dir: Option<PathBuf>,
    pub return_path: String,
    pub journal: Option<PathBuf>,
    pub dry_run: bool,
}

/// Execute the rename step for one process document
pub fn run_rename_command(command: RunCommand, app: &AppConfig) -> Result<()> {
    let file_store = FileProcessStore::new(&command.process);
    let document = file_store
        .load()
        .with_context(|| format!("Failed to load process document {}", command.process.display()))?;

    let plugin_config = match &command.config {
        Some(path) => ConfigLoader::load_file(path)?,
        None => {
            let dir = command
                .config_dir
                .clone()
                .unwrap_or_else(|| app.config_dir.clone());
            ConfigLoader::new(dir).load_plugin(PLUGIN_TITLE)?
        }
    };

    let base_dir = command
        .process
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    let journal: Arc<dyn ProcessJournal> = match &command.journal {
        Some(path) => Arc::new(FileJournal::new(path)),
        None => Arc::new(NullJournal),
    };
    let store: Arc<dyn ProcessStore> = if command.dry_run {
        Arc::new(DryRunStore)
    } else {
        Arc::new(file_store)
    };

    let host = StepHost::new(
        plugin_config,
        Arc::new(MetadataReplacerFactory::new(base_dir)),
        journal,
        store,
    );

    let old_title = document.process.title.clone();
    let process_id = document.process.id;
    debug!("Running {} for process {}", PLUGIN_TITLE, process_id);

    let mut plugin = RenameProcessStep::new(host);
    plugin.initialize(document.into_step(), &command.return_path);

    match plugin.run() {
        PluginReturnValue::Finish => {
            let new_title = plugin
                .step()
                .map(|step| step.process.title.clone())
                .unwrap_or_default();
            if command.dry_run {
                println!("Dry run: process {process_id} would be renamed '{old_title}' -> '{new_title}'");
            } else {
                println!("Renamed process {process_id}: '{old_title}' -> '{new_title}'");
            }
            println!("Return to: {}", plugin.finish());
            Ok(())
        }
        PluginReturnValue::Error => Err(anyhow!(
            "Rename step failed for process {process_id}, title left as '{old_title}'"
        )),
    }
}
