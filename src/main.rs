use std::process::ExitCode;

use clap::Parser;
use glossa::cli::{Arguments, ExitStatus};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    let args = Arguments::parse();

    // Logs go to stderr so command output on stdout stays pipe-friendly.
    let filter = if args.verbose() {
        EnvFilter::new("glossa=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match glossa::cli::run_cli(args) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
