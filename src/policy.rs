//! Execution policy consulted by the dispatcher.
//!
//! - [`ExecutionPolicy`] trait for the restricted-environment and privilege gates
//! - [`SystemPolicy`] backed by the real environment and effective uid
//! - [`MockPolicy`] with fixed answers, for tests

use std::cell::Cell;

use crate::environment::OfflineDetector;
use crate::error::{Result, VerbError};
use crate::privilege;

/// Policy gates applied after a verb has been selected.
///
/// This trait allows mocking the host in tests.
pub trait ExecutionPolicy {
    /// Whether online-only verbs should be skipped.
    fn is_restricted(&self) -> bool;

    /// Fail unless the process may run a privileged verb.
    ///
    /// Implementations return the error without logging it; the dispatcher
    /// reports it as the single diagnostic for the failed call.
    fn check_privilege(&self, verb: &str) -> Result<()>;
}

/// Policy backed by the process environment.
#[derive(Debug, Clone, Default)]
pub struct SystemPolicy {
    detector: OfflineDetector,
}

impl SystemPolicy {
    /// Create a policy reading `VERBCTL_*` overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a policy reading `<prefix>_OFFLINE` and `<prefix>_IGNORE_CHROOT`.
    pub fn with_env_prefix(prefix: impl Into<String>) -> Self {
        Self {
            detector: OfflineDetector::with_prefix(prefix),
        }
    }

    pub fn detector(&self) -> &OfflineDetector {
        &self.detector
    }
}

impl ExecutionPolicy for SystemPolicy {
    fn is_restricted(&self) -> bool {
        self.detector.is_restricted()
    }

    fn check_privilege(&self, verb: &str) -> Result<()> {
        privilege::must_be_root(verb)
    }
}

/// Policy with fixed answers that counts how often each gate is consulted.
///
/// # Example
///
/// ```
/// use verbctl::policy::{ExecutionPolicy, MockPolicy};
///
/// let policy = MockPolicy::new().restricted(true);
/// assert!(policy.is_restricted());
/// assert!(policy.check_privilege("restart").is_ok());
/// assert_eq!(policy.restricted_checks(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockPolicy {
    restricted: bool,
    unprivileged: bool,
    restricted_checks: Cell<usize>,
    privilege_checks: Cell<usize>,
}

impl MockPolicy {
    /// An online, privileged host.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restricted(mut self, restricted: bool) -> Self {
        self.restricted = restricted;
        self
    }

    pub fn elevated(mut self, elevated: bool) -> Self {
        self.unprivileged = !elevated;
        self
    }

    pub fn restricted_checks(&self) -> usize {
        self.restricted_checks.get()
    }

    pub fn privilege_checks(&self) -> usize {
        self.privilege_checks.get()
    }
}

impl ExecutionPolicy for MockPolicy {
    fn is_restricted(&self) -> bool {
        self.restricted_checks.set(self.restricted_checks.get() + 1);
        self.restricted
    }

    fn check_privilege(&self, verb: &str) -> Result<()> {
        self.privilege_checks.set(self.privilege_checks.get() + 1);
        if self.unprivileged {
            return Err(VerbError::PermissionDenied {
                verb: verb.to_string(),
            });
        }
        Ok(())
    }
}

impl<P: ExecutionPolicy + ?Sized> ExecutionPolicy for &P {
    fn is_restricted(&self) -> bool {
        (**self).is_restricted()
    }

    fn check_privilege(&self, verb: &str) -> Result<()> {
        (**self).check_privilege(verb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_defaults_to_online_and_elevated() {
        let policy = MockPolicy::new();
        assert!(!policy.is_restricted());
        assert!(policy.check_privilege("restart").is_ok());
        assert_eq!(policy.restricted_checks(), 1);
        assert_eq!(policy.privilege_checks(), 1);
    }

    #[test]
    fn mock_unprivileged_denies() {
        let policy = MockPolicy::new().elevated(false);
        let err = policy.check_privilege("restart").unwrap_err();
        assert!(matches!(err, VerbError::PermissionDenied { ref verb } if verb == "restart"));
    }

    #[test]
    fn reference_delegates() {
        let policy = MockPolicy::new().restricted(true);
        let by_ref = &policy;
        assert!(by_ref.is_restricted());
        assert_eq!(policy.restricted_checks(), 1);
    }

    #[test]
    fn system_policy_uses_prefix() {
        let policy = SystemPolicy::with_env_prefix("PKGTOOL");
        assert_eq!(policy.detector().offline_var(), "PKGTOOL_OFFLINE");
        assert_eq!(
            SystemPolicy::new().detector().offline_var(),
            "VERBCTL_OFFLINE"
        );
    }
}
