//! Restricted-environment detection.
//!
//! Decides whether online-only verbs should be skipped. The priority chain is:
//!
//! 1. `<PREFIX>_OFFLINE` override (truthy forces offline, falsy forces online)
//! 2. Chroot probe, itself overridable with `<PREFIX>_IGNORE_CHROOT`
//! 3. Fallback to "not restricted"

pub mod detection;
pub mod flags;

pub use detection::{running_in_chroot, OfflineDetector, DEFAULT_ENV_PREFIX};
pub use flags::{env_bool, parse_boolean, ParseBoolError};
