//! Command implementation modules
//!
//! Each command is implemented as a separate module.

pub mod info;
pub mod run;

pub use info::run_info_command;
pub use run::{run_rename_command, RunCommand};
