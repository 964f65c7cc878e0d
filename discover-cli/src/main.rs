//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use discover_cli::CliError;

fn main() {
    match discover_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("discover: {err}");
            std::process::exit(1);
        }
    }
}
