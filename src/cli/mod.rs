//! Command-line interface for verbctl.
//!
//! # Architecture
//!
//! - [`args`] - Global options using clap derive macros
//! - [`commands`] - The verb table and its handlers
//!
//! clap only parses options; everything from the first positional argument
//! on is handed to the verb dispatcher untouched.

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::{Context, VERBS};
