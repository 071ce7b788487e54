//! CLI argument definitions.

use clap::Parser;

/// verbctl - Table-driven subcommand dispatch.
#[derive(Debug, Parser)]
#[command(name = "verbctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, env = "VERBCTL_DEBUG")]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Operation followed by its arguments (defaults to `status`)
    #[arg(value_name = "VERB", trailing_var_arg = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Argument vector for the dispatcher and the index of the verb token.
    ///
    /// Options have already been consumed, so the verb sits right after
    /// the program name.
    pub fn dispatch_argv(&self) -> (Vec<String>, usize) {
        let argv = std::iter::once("verbctl".to_string())
            .chain(self.args.iter().cloned())
            .collect();
        (argv, 1)
    }
}
