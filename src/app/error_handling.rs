//! Error handling utilities

use tracing::error;

/// Exit status for failures, including a step that reports `ERROR`
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Handle fatal errors and exit with a failure status
///
/// The error chain is printed when `verbose >= 1`.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);
    eprintln!("Error: {error}");

    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {i}: {cause}");
        }
    }

    std::process::exit(FAILURE_EXIT_CODE)
}
