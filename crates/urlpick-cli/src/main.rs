use urlpick_core::logging;

mod cli;
mod expand;
mod launch;

use crate::cli::CliCommand;

fn main() {
    // Log to the state dir when possible, stderr otherwise.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("urlpick error: {:#}", err);
        std::process::exit(1);
    }
}
