use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

mod cli;
mod error;
mod exits;
mod pass;
mod rand;
mod secure;
mod settings;

/// Developer logging on stderr, `RNDPASSW_LOG=debug` to see pipeline sizes.
fn init_logging() {
    let filter = EnvFilter::try_from_env("RNDPASSW_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    exits::disable_core_dumps();
    exits::install_handlers();
    init_logging();

    cli::run(env::args_os())
}
