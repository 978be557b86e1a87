use clap::Parser;
use rename_process_step::app::{handle_fatal_error, init_logging, AppConfig};
use rename_process_step::cli::{execute_command, Cli};

fn main() {
    let cli = Cli::parse();

    let config = AppConfig::new(cli.verbose);
    init_logging(&config);

    if let Err(e) = execute_command(cli.command, &config) {
        handle_fatal_error(e, config.verbose);
    }
}
