//! # Rename Process Step
//!
//! A workflow step plugin that renames a process from a configured title
//! template. Workflow variables are resolved by the host, unknown variables
//! are stripped, spaces are removed and the process is saved under its new
//! title.
//!
//! ## Usage
//!
//! ```bash
//! rename-process-step run process.yaml --config-dir /opt/goobi/config [--dry-run]
//! ```
//!
//! ## Modules
//!
//! - `app` - Logging setup, application configuration and fatal error handling
//! - `cli` - Command-line argument parsing and command implementations
//! - `config` - Project and step scoped plugin configuration
//! - `host` - Trait-based abstractions for the workflow host (variables, journal, persistence)
//! - `process` - Process and step records
//! - `step` - The step plugin interface and the rename step
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod host;
pub mod process;
pub mod step;

pub use error::{Error, Result};
