//! Verb dispatching.
//!
//! This module provides the dispatch pipeline:
//! - [`find_verb`] for table lookup with default-verb fallback
//! - [`Dispatcher`] for running the full pipeline against an [`ExecutionPolicy`]
//! - [`dispatch_verb`] for dispatching against the real host
//!
//! Each call runs `lookup → argument count → restricted environment →
//! privilege → handler`, stopping at the first gate that fails.

use tracing::{debug, error, info};

use crate::error::{Result, VerbError};
use crate::policy::{ExecutionPolicy, SystemPolicy};
use crate::verb::{CommandResult, Verb, VerbFlags};

/// What a successful dispatch did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The handler ran and returned this result.
    Executed(CommandResult),

    /// The verb is online-only and the environment is restricted.
    Skipped { verb: &'static str },
}

impl Outcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::Skipped { .. })
    }

    /// Exit code for the process; a skip counts as success.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Executed(result) => result.exit_code,
            Outcome::Skipped { .. } => 0,
        }
    }

    /// Process exit status; codes outside `0..=255` become 1.
    pub fn exit_status(&self) -> u8 {
        u8::try_from(self.exit_code()).unwrap_or(1)
    }
}

/// Find the entry for `name`, or the default entry when no name is given.
///
/// Entries are scanned in order and the first match wins.
pub fn find_verb<'a, U>(verbs: &'a [Verb<U>], name: Option<&str>) -> Option<&'a Verb<U>> {
    verbs.iter().find(|verb| match name {
        Some(name) => verb.name == name,
        None => verb.is_default(),
    })
}

/// Dispatch against the real host environment.
///
/// See [`Dispatcher::dispatch`].
pub fn dispatch_verb<U>(
    argv: &[String],
    option_index: usize,
    verbs: &[Verb<U>],
    userdata: &mut U,
) -> Result<Outcome> {
    Dispatcher::new(SystemPolicy::new()).dispatch(argv, option_index, verbs, userdata)
}

/// Selects and runs verbs from a table.
///
/// The dispatcher holds no state besides its policy, so one instance can
/// serve any number of tables and calls.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher<P> {
    policy: P,
}

impl<P: ExecutionPolicy> Dispatcher<P> {
    /// Create a dispatcher consulting `policy` for its gates.
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Select the verb named by `argv[option_index]` and run it.
    ///
    /// `option_index` is the index of the first positional argument, i.e.
    /// where option parsing stopped. When `argv` has no positional
    /// arguments, the entry flagged [`VerbFlags::DEFAULT`] is selected and
    /// its handler receives a single argument holding its own name.
    ///
    /// # Panics
    ///
    /// Panics if `verbs` is empty or `option_index > argv.len()`.
    pub fn dispatch<U>(
        &self,
        argv: &[String],
        option_index: usize,
        verbs: &[Verb<U>],
        userdata: &mut U,
    ) -> Result<Outcome> {
        assert!(!verbs.is_empty(), "verb table must not be empty");
        assert!(
            option_index <= argv.len(),
            "option index {} past end of {} arguments",
            option_index,
            argv.len()
        );
        debug_assert!(
            verbs.iter().filter(|verb| verb.is_default()).count() <= 1,
            "verb table has more than one default entry"
        );

        let name = argv.get(option_index).map(String::as_str);

        let Some(verb) = find_verb(verbs, name) else {
            let err = match name {
                Some(name) => VerbError::UnknownVerb {
                    name: name.to_string(),
                },
                None => VerbError::MissingVerb,
            };
            error!("{}", err);
            return Err(err);
        };

        // The default verb's own name stands in for the omitted token.
        let left = match name {
            Some(_) => argv.len() - option_index,
            None => 1,
        };

        if let Err(err) = verb.check_arg_count(left) {
            error!("{}", err);
            return Err(err);
        }

        if verb.flags.contains(VerbFlags::ONLINE_ONLY) && self.policy.is_restricted() {
            match name {
                Some(name) => info!("Running in chroot, ignoring request: {}", name),
                None => info!("Running in chroot, ignoring request."),
            }
            return Ok(Outcome::Skipped { verb: verb.name });
        }

        if verb.flags.contains(VerbFlags::MUST_BE_ROOT) {
            if let Err(err) = self.policy.check_privilege(verb.name) {
                error!("{}", err);
                return Err(err);
            }
        }

        debug!("Dispatching '{}' with {} argument(s)", verb.name, left);

        let result = match name {
            Some(_) => (verb.handler)(left, &argv[option_index..], userdata),
            None => {
                let fake = [verb.name.to_string()];
                (verb.handler)(1, &fake, userdata)
            }
        };

        result
            .map(Outcome::Executed)
            .map_err(|source| VerbError::Handler {
                verb: verb.name.to_string(),
                source,
            })
    }
}
