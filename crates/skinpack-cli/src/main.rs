use skinpack_core::logging;

mod cli;

use crate::cli::{CliCommand, Reported};

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args().await {
        if !err.is::<Reported>() {
            eprintln!("skinpack error: {:#}", err);
        }
        std::process::exit(1);
    }
}
