//! csa - audit App Store Connect signing credentials
//!
//! Retrieves code-signing certificates and provisioning profiles, flags
//! what is expired, expiring soon, or invalid, and prints a report.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use codesign_audit::cli::Cli;
use codesign_audit::runner;
use console::style;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Bare invocation prints help, matching `csa --help`
    if std::env::args().len() == 1 {
        let _ = Cli::command().print_help();
        return;
    }

    // Parse manually so flag errors keep the exit-code contract: help and
    // version exit 0, every user-facing error exits 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                let _ = err.print();
                std::process::exit(0);
            }
            eprint!("{err}");
            std::process::exit(1);
        }
    };

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = runner::run_audit(cli).await {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}
