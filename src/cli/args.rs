//! CLI argument structures

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rename workflow processes from a configured title template
#[derive(Parser)]
#[command(name = "rename-process-step")]
#[command(about = "rename-process-step - Rename a process from its configured title template", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the rename step against a process document
    #[command(name = "run")]
    Run {
        /// Process document (YAML or JSON) holding the process and the current step
        process: PathBuf,

        /// Plugin configuration file, overrides the configuration directory lookup
        #[arg(short = 'c', long, conflicts_with = "config_dir")]
        config: Option<PathBuf>,

        /// Directory holding plugin_intranda_step_rename_process.{toml,yaml,yml}
        #[arg(long, value_name = "DIR")]
        config_dir: Option<PathBuf>,

        /// Host path to return to once the step is done
        #[arg(long, default_value = "")]
        return_path: String,

        /// Append journal entries to this file (JSON lines)
        #[arg(short = 'j', long, value_name = "FILE")]
        journal: Option<PathBuf>,

        /// Resolve the new title without saving the process
        #[arg(long, help = "Preview the new title without saving it")]
        dry_run: bool,
    },

    /// Print the plugin identity as JSON
    #[command(name = "info")]
    Info,
}
