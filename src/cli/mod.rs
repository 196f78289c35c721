mod context;
mod flags;
pub mod prompts;

use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;

pub use context::{Context, Failed};
pub use flags::CliFlags;

/// Parse arguments, generate, and map the outcome to an exit status.
pub fn run<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let flags = match CliFlags::try_parse_from(args) {
        Ok(flags) => flags,
        Err(e) => {
            let _ = e.print();
            // --help and --version land here too
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match Context::new(flags).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(Failed) => ExitCode::FAILURE,
    }
}
