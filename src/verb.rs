//! Verb descriptors.
//!
//! A verb table is a caller-owned slice of [`Verb`] entries, built once and
//! read-only during dispatch. Each entry names a subcommand, bounds how many
//! positional arguments it takes, carries policy [`VerbFlags`], and points
//! at its [`Handler`].
//!
//! # Example
//!
//! ```
//! use verbctl::{CommandResult, Verb, VerbFlags};
//!
//! fn status(_left: usize, _args: &[String], _ctx: &mut ()) -> anyhow::Result<CommandResult> {
//!     Ok(CommandResult::success())
//! }
//!
//! let verbs = [Verb::new("status", status).args(1, 1).flags(VerbFlags::DEFAULT)];
//! assert!(verbs[0].is_default());
//! ```

use std::fmt;
use std::ops::BitOr;

/// Sentinel for an unbounded argument count.
pub const VERB_ANY: Option<usize> = None;

/// Handler invoked for a matched verb.
///
/// Receives the positional argument count, the arguments starting at the
/// verb token, and the caller's context.
pub type Handler<U> = fn(usize, &[String], &mut U) -> anyhow::Result<CommandResult>;

/// Result of a handler run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Independent policy bits attached to a verb.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VerbFlags(u8);

impl VerbFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// Selected when no verb is given.
    pub const DEFAULT: Self = Self(1 << 0);
    /// Skipped inside a chroot or when offline mode is forced.
    pub const ONLINE_ONLY: Self = Self(1 << 1);
    /// Requires an effective uid of 0.
    pub const MUST_BE_ROOT: Self = Self(1 << 2);

    /// Whether every bit of `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Both sets combined; usable in `static` tables where `|` is not.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitOr for VerbFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl fmt::Debug for VerbFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (Self::DEFAULT, "DEFAULT"),
            (Self::ONLINE_ONLY, "ONLINE_ONLY"),
            (Self::MUST_BE_ROOT, "MUST_BE_ROOT"),
        ];
        let set: Vec<&str> = names
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        if set.is_empty() {
            write!(f, "VerbFlags(NONE)")
        } else {
            write!(f, "VerbFlags({})", set.join(" | "))
        }
    }
}

/// A single entry in a verb table.
pub struct Verb<U> {
    /// Name matched exactly against the first positional argument.
    pub name: &'static str,

    /// Inclusive lower bound on positional arguments, counting the verb itself.
    pub min_args: Option<usize>,

    /// Inclusive upper bound on positional arguments, counting the verb itself.
    pub max_args: Option<usize>,

    /// Policy bits.
    pub flags: VerbFlags,

    /// Function invoked when the verb is selected.
    pub handler: Handler<U>,
}

impl<U> Verb<U> {
    /// Create a verb with unbounded argument counts and no flags.
    pub const fn new(name: &'static str, handler: Handler<U>) -> Self {
        Self {
            name,
            min_args: VERB_ANY,
            max_args: VERB_ANY,
            flags: VerbFlags::NONE,
            handler,
        }
    }

    /// Bound the argument count on both sides.
    pub const fn args(mut self, min: usize, max: usize) -> Self {
        self.min_args = Some(min);
        self.max_args = Some(max);
        self
    }

    pub const fn min_args(mut self, min: usize) -> Self {
        self.min_args = Some(min);
        self
    }

    pub const fn max_args(mut self, max: usize) -> Self {
        self.max_args = Some(max);
        self
    }

    /// Replace the verb's flags.
    pub const fn flags(mut self, flags: VerbFlags) -> Self {
        self.flags = flags;
        self
    }

    pub const fn is_default(&self) -> bool {
        self.flags.contains(VerbFlags::DEFAULT)
    }

    /// Check `count` against the declared bounds.
    ///
    /// The minimum is checked before the maximum.
    pub fn check_arg_count(&self, count: usize) -> crate::Result<()> {
        if let Some(min) = self.min_args {
            if count < min {
                return Err(crate::VerbError::TooFewArguments {
                    verb: self.name.to_string(),
                    count,
                    min,
                });
            }
        }

        if let Some(max) = self.max_args {
            if count > max {
                return Err(crate::VerbError::TooManyArguments {
                    verb: self.name.to_string(),
                    count,
                    max,
                });
            }
        }

        Ok(())
    }
}

impl<U> fmt::Debug for Verb<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verb")
            .field("name", &self.name)
            .field("min_args", &self.min_args)
            .field("max_args", &self.max_args)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}
