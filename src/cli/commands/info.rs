//! Info command implementation

use crate::step::RenameProcessStep;
use anyhow::Result;

/// Print the plugin identity the host registers the step under
pub fn run_info_command() -> Result<()> {
    let info = RenameProcessStep::describe();
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
