//! codetint: syntax-highlight a source file as ANSI text or HTML.

mod app;
mod cli;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    match app::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("codetint: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never mix with highlighted output.
fn setup_tracing(verbose: bool) {
    tracing_subscriber::fmt()
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
