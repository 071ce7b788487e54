//! verbctl - Table-driven subcommand dispatch.
//!
//! A command-line tool declares its subcommands ("verbs") as a static table
//! of [`Verb`] entries. [`dispatch_verb`] picks the entry named by the first
//! positional argument (or the default entry when none is given), checks
//! the argument count, applies the execution policy and calls the handler.
//!
//! # Modules
//!
//! - [`cli`] - The `verbctl` binary's options and verb table
//! - [`dispatcher`] - Verb lookup and the dispatch pipeline
//! - [`environment`] - Offline and chroot detection
//! - [`error`] - Error types and result aliases
//! - [`policy`] - Execution policy trait and implementations
//! - [`privilege`] - Effective-uid checks
//! - [`verb`] - Verb descriptors and flags
//!
//! # Example
//!
//! ```
//! use verbctl::policy::MockPolicy;
//! use verbctl::{CommandResult, Dispatcher, Outcome, Verb, VerbFlags};
//!
//! fn status(left: usize, args: &[String], seen: &mut Vec<String>) -> anyhow::Result<CommandResult> {
//!     assert_eq!(left, 1);
//!     seen.extend_from_slice(args);
//!     Ok(CommandResult::success())
//! }
//!
//! let verbs = [Verb::new("status", status).args(1, 1).flags(VerbFlags::DEFAULT)];
//! let argv = vec!["tool".to_string()];
//! let mut seen = Vec::new();
//!
//! let outcome = Dispatcher::new(MockPolicy::new())
//!     .dispatch(&argv, 1, &verbs, &mut seen)
//!     .unwrap();
//! assert_eq!(outcome, Outcome::Executed(CommandResult::success()));
//! assert_eq!(seen, vec!["status"]);
//! ```

pub mod cli;
pub mod dispatcher;
pub mod environment;
pub mod error;
pub mod policy;
pub mod privilege;
pub mod verb;

pub use dispatcher::{dispatch_verb, find_verb, Dispatcher, Outcome};
pub use error::{Result, VerbError};
pub use verb::{CommandResult, Handler, Verb, VerbFlags, VERB_ANY};
