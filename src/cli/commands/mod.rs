//! Verb table for the `verbctl` binary.
//!
//! Each verb lives in its own module and exposes a `run` handler matching
//! [`Handler`](crate::Handler). [`VERBS`] wires them together with their
//! argument bounds and policy flags.

pub mod list;
pub mod restart;
pub mod status;

use crate::policy::SystemPolicy;
use crate::verb::{Verb, VerbFlags};

/// Verbs understood by `verbctl`, in lookup order.
pub static VERBS: [Verb<Context>; 3] = [
    Verb::new("status", status::run)
        .args(1, 1)
        .flags(VerbFlags::DEFAULT),
    Verb::new("list", list::run),
    Verb::new("restart", restart::run)
        .args(1, 2)
        .flags(VerbFlags::ONLINE_ONLY.union(VerbFlags::MUST_BE_ROOT)),
];

/// State handed to every handler.
#[derive(Debug)]
pub struct Context {
    /// Minimal output.
    pub quiet: bool,

    /// Host policy, for verbs that report on it.
    pub policy: SystemPolicy,

    echo: bool,
    lines: Vec<String>,
}

impl Context {
    /// Create a context that prints to stdout.
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            policy: SystemPolicy::new(),
            echo: true,
            lines: Vec::new(),
        }
    }

    /// Create a context that only records output.
    pub fn captured(quiet: bool) -> Self {
        Self {
            echo: false,
            ..Self::new(quiet)
        }
    }

    /// Write one line of output.
    pub fn say(&mut self, line: impl Into<String>) {
        let line = line.into();
        if self.echo {
            println!("{}", line);
        }
        self.lines.push(line);
    }

    /// Lines written so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_default() {
        let defaults: Vec<&str> = VERBS
            .iter()
            .filter(|verb| verb.is_default())
            .map(|verb| verb.name)
            .collect();
        assert_eq!(defaults, vec!["status"]);
    }

    #[test]
    fn restart_is_gated() {
        let restart = crate::find_verb(&VERBS, Some("restart")).unwrap();
        assert!(restart.flags.contains(VerbFlags::ONLINE_ONLY));
        assert!(restart.flags.contains(VerbFlags::MUST_BE_ROOT));
        assert_eq!((restart.min_args, restart.max_args), (Some(1), Some(2)));
    }

    #[test]
    fn captured_context_records_lines() {
        let mut ctx = Context::captured(false);
        ctx.say("hello");
        ctx.say(String::from("world"));
        assert_eq!(ctx.lines(), ["hello", "world"]);
    }
}
