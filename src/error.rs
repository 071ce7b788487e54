//! Error types for verb dispatch.
//!
//! This module defines [`VerbError`], the error returned by
//! [`dispatch_verb`](crate::dispatch_verb), and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - Lookup and argument-count failures map to `EINVAL`
//! - A failed privilege check maps to `EPERM`
//! - Handler failures pass through untouched as [`VerbError::Handler`]

use thiserror::Error;

/// Core error type for verb dispatch.
#[derive(Debug, Error)]
pub enum VerbError {
    /// The supplied verb matches no table entry.
    #[error("Unknown operation {name}.")]
    UnknownVerb { name: String },

    /// No verb was supplied and the table has no default entry.
    #[error("Requires operation parameter.")]
    MissingVerb,

    /// Fewer positional arguments than the verb accepts.
    #[error("Too few arguments.")]
    TooFewArguments {
        verb: String,
        count: usize,
        min: usize,
    },

    /// More positional arguments than the verb accepts.
    #[error("Too many arguments.")]
    TooManyArguments {
        verb: String,
        count: usize,
        max: usize,
    },

    /// The verb requires elevated privilege and the process lacks it.
    #[error("Need to be root.")]
    PermissionDenied { verb: String },

    /// The verb's handler ran and failed.
    #[error("Operation '{verb}' failed: {source}")]
    Handler {
        verb: String,
        #[source]
        source: anyhow::Error,
    },
}

impl VerbError {
    /// The conventional errno for this failure.
    ///
    /// Handler failures carry no errno of their own and report `EIO`.
    pub fn errno(&self) -> i32 {
        match self {
            VerbError::UnknownVerb { .. }
            | VerbError::MissingVerb
            | VerbError::TooFewArguments { .. }
            | VerbError::TooManyArguments { .. } => EINVAL,
            VerbError::PermissionDenied { .. } => EPERM,
            VerbError::Handler { .. } => EIO,
        }
    }

    /// Process exit status for this failure: the errno, so each kind of
    /// failure exits with its own code.
    pub fn exit_status(&self) -> u8 {
        u8::try_from(self.errno()).unwrap_or(1)
    }

    /// Whether this is a usage error (bad verb or bad argument count).
    pub fn is_usage(&self) -> bool {
        self.errno() == EINVAL
    }
}

#[cfg(unix)]
const EINVAL: i32 = libc::EINVAL;
#[cfg(unix)]
const EPERM: i32 = libc::EPERM;
#[cfg(unix)]
const EIO: i32 = libc::EIO;

#[cfg(not(unix))]
const EINVAL: i32 = 22;
#[cfg(not(unix))]
const EPERM: i32 = 1;
#[cfg(not(unix))]
const EIO: i32 = 5;

/// Result type alias for verb dispatch.
pub type Result<T> = std::result::Result<T, VerbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_verb_displays_name() {
        let err = VerbError::UnknownVerb {
            name: "frobnicate".into(),
        };
        assert_eq!(err.to_string(), "Unknown operation frobnicate.");
    }

    #[test]
    fn missing_verb_message() {
        assert_eq!(
            VerbError::MissingVerb.to_string(),
            "Requires operation parameter."
        );
    }

    #[test]
    fn usage_errors_map_to_einval() {
        let errors = [
            VerbError::UnknownVerb { name: "x".into() },
            VerbError::MissingVerb,
            VerbError::TooFewArguments {
                verb: "show".into(),
                count: 1,
                min: 2,
            },
            VerbError::TooManyArguments {
                verb: "status".into(),
                count: 3,
                max: 1,
            },
        ];
        for err in &errors {
            assert_eq!(err.errno(), EINVAL, "{err:?}");
            assert!(err.is_usage());
        }
    }

    #[test]
    fn permission_denied_maps_to_eperm() {
        let err = VerbError::PermissionDenied {
            verb: "restart".into(),
        };
        assert_eq!(err.errno(), EPERM);
        assert!(!err.is_usage());
        assert_eq!(err.to_string(), "Need to be root.");
    }

    #[test]
    fn handler_error_keeps_source() {
        let err = VerbError::Handler {
            verb: "restart".into(),
            source: anyhow::anyhow!("unit not loaded"),
        };
        let msg = err.to_string();
        assert!(msg.contains("restart"));
        assert!(msg.contains("unit not loaded"));
        assert_eq!(err.errno(), EIO);
    }

    #[test]
    fn exit_status_distinguishes_kinds() {
        let usage = VerbError::UnknownVerb { name: "x".into() };
        let denied = VerbError::PermissionDenied {
            verb: "restart".into(),
        };
        let failed = VerbError::Handler {
            verb: "list".into(),
            source: anyhow::anyhow!("nope"),
        };
        assert_eq!(usage.exit_status(), EINVAL as u8);
        assert_eq!(denied.exit_status(), EPERM as u8);
        assert_eq!(failed.exit_status(), EIO as u8);
        assert_ne!(usage.exit_status(), denied.exit_status());
        assert_ne!(usage.exit_status(), failed.exit_status());
        assert_ne!(denied.exit_status(), failed.exit_status());
        assert_ne!(usage.exit_status(), 0);
    }
}
