//! CLI entry point for the pixel traversal entropy estimator

use clap::Parser;
use pixel_entropy::io::cli::{Analyzer, Cli};
use pixel_entropy::io::configuration::DEFAULT_LOG_FILTER;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

// The report on stdout and the failure message on stderr are the tool's output
#[allow(clippy::print_stdout, clippy::print_stderr)]
fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    match Analyzer::new(cli).run() {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
