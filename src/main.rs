//! verbctl CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use verbctl::cli::{Cli, Context, VERBS};
use verbctl::{dispatch_verb, VerbError};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("verbctl=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("verbctl=info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("verbctl starting with args: {:?}", cli);

    let (argv, option_index) = cli.dispatch_argv();
    let mut ctx = Context::new(cli.quiet);

    match dispatch_verb(&argv, option_index, &VERBS, &mut ctx) {
        Ok(outcome) => ExitCode::from(outcome.exit_status()),
        Err(e @ VerbError::Handler { .. }) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_status())
        }
        // Already reported by the dispatcher.
        Err(e) => ExitCode::from(e.exit_status()),
    }
}
