//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective implementations.

use crate::app::AppConfig;
use crate::cli::args::Commands;
use crate::cli::commands::*;
use anyhow::Result;

/// Execute a CLI command based on the parsed arguments
pub fn execute_command(command: Commands, app: &AppConfig) -> Result<()> {
    match command {
        Commands::Run {
            process,
            config,
            config_dir,
            return_path,
            journal,
            dry_run,
        } => {
            let run_cmd = RunCommand {
                process,
                config,
                config_dir,
                return_path,
                journal,
                dry_run,
            };
            run_rename_command(run_cmd, app)
        }
        Commands::Info => run_info_command(),
    }
}
