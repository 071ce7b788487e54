//! Offline and chroot detection.
//!
//! Online-only verbs are skipped when the process runs inside a chroot
//! (package builds, image composition) or when offline mode is forced
//! through the environment, e.g. from a package post-install script.

use std::io;
use std::path::Path;

use tracing::debug;

use super::flags::env_bool;

/// Prefix used for the override variables when none is configured.
pub const DEFAULT_ENV_PREFIX: &str = "VERBCTL";

/// Detects whether the process runs in a restricted environment.
///
/// # Example
///
/// ```
/// use verbctl::environment::OfflineDetector;
///
/// let detector = OfflineDetector::with_prefix("MYTOOL");
/// assert_eq!(detector.offline_var(), "MYTOOL_OFFLINE");
///
/// let env = |key: &str| match key {
///     "MYTOOL_OFFLINE" => Ok("1".to_string()),
///     _ => Err(std::env::VarError::NotPresent),
/// };
/// assert!(detector.is_restricted_with(env, || Ok(false)));
/// ```
#[derive(Debug, Clone)]
pub struct OfflineDetector {
    prefix: String,
}

impl Default for OfflineDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl OfflineDetector {
    /// Create a detector reading `VERBCTL_*` overrides.
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_ENV_PREFIX)
    }

    /// Create a detector reading `<prefix>_OFFLINE` and `<prefix>_IGNORE_CHROOT`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn offline_var(&self) -> String {
        format!("{}_OFFLINE", self.prefix)
    }

    pub fn ignore_chroot_var(&self) -> String {
        format!("{}_IGNORE_CHROOT", self.prefix)
    }

    /// Check the real process environment and filesystem.
    pub fn is_restricted(&self) -> bool {
        self.is_restricted_with(|key| std::env::var(key), running_in_chroot)
    }

    /// Check with a custom env var lookup and chroot probe (for testing).
    ///
    /// An explicit offline override wins. Otherwise the chroot probe runs,
    /// unless the ignore-chroot override is truthy. Parse failures and
    /// probe errors are logged at debug level and never count as restricted.
    pub fn is_restricted_with<F, P>(&self, env_fn: F, probe: P) -> bool
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
        P: FnOnce() -> io::Result<bool>,
    {
        let offline_var = self.offline_var();
        match env_bool(&offline_var, &env_fn) {
            Some(Ok(offline)) => return offline,
            Some(Err(e)) => debug!("Parsing {}: {}", offline_var, e),
            None => {}
        }

        match self.in_chroot_with(&env_fn, probe) {
            Ok(in_chroot) => in_chroot,
            Err(e) => {
                debug!("running_in_chroot(): {}", e);
                false
            }
        }
    }

    fn in_chroot_with<F, P>(&self, env_fn: &F, probe: P) -> io::Result<bool>
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
        P: FnOnce() -> io::Result<bool>,
    {
        let ignore_var = self.ignore_chroot_var();
        match env_bool(&ignore_var, env_fn) {
            Some(Ok(true)) => return Ok(false),
            Some(Err(e)) => debug!("Parsing {}: {}", ignore_var, e),
            Some(Ok(false)) | None => {}
        }

        probe()
    }
}

/// Whether the root of PID 1 differs from ours.
///
/// Errors when `/proc` is unavailable or `/proc/1/root` is not readable,
/// which is the normal case for unprivileged processes on some systems.
pub fn running_in_chroot() -> io::Result<bool> {
    files_same(Path::new("/proc/1/root"), Path::new("/")).map(|same| !same)
}

#[cfg(unix)]
fn files_same(a: &Path, b: &Path) -> io::Result<bool> {
    use std::os::unix::fs::MetadataExt;

    let a = std::fs::metadata(a)?;
    let b = std::fs::metadata(b)?;
    Ok(a.dev() == b.dev() && a.ino() == b.ino())
}

#[cfg(not(unix))]
fn files_same(_a: &Path, _b: &Path) -> io::Result<bool> {
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;

    fn env_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, std::env::VarError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned().ok_or(std::env::VarError::NotPresent)
    }

    #[test]
    fn default_prefix_names() {
        let detector = OfflineDetector::new();
        assert_eq!(detector.offline_var(), "VERBCTL_OFFLINE");
        assert_eq!(detector.ignore_chroot_var(), "VERBCTL_IGNORE_CHROOT");
    }

    #[test]
    fn offline_true_wins_without_probing() {
        let probed = Cell::new(false);
        let detector = OfflineDetector::new();
        let restricted = detector.is_restricted_with(env_from(&[("VERBCTL_OFFLINE", "yes")]), || {
            probed.set(true);
            Ok(false)
        });
        assert!(restricted);
        assert!(!probed.get());
    }

    #[test]
    fn offline_false_skips_probe() {
        let detector = OfflineDetector::new();
        let restricted =
            detector.is_restricted_with(env_from(&[("VERBCTL_OFFLINE", "0")]), || Ok(true));
        assert!(!restricted);
    }

    #[test]
    fn unparsable_offline_falls_through_to_probe() {
        let detector = OfflineDetector::new();
        let env = env_from(&[("VERBCTL_OFFLINE", "perhaps")]);
        assert!(detector.is_restricted_with(&env, || Ok(true)));
        assert!(!detector.is_restricted_with(&env, || Ok(false)));
    }

    #[test]
    fn unset_offline_uses_probe() {
        let detector = OfflineDetector::new();
        assert!(detector.is_restricted_with(env_from(&[]), || Ok(true)));
        assert!(!detector.is_restricted_with(env_from(&[]), || Ok(false)));
    }

    #[test]
    fn ignore_chroot_suppresses_probe() {
        let probed = Cell::new(false);
        let detector = OfflineDetector::new();
        let restricted =
            detector.is_restricted_with(env_from(&[("VERBCTL_IGNORE_CHROOT", "1")]), || {
                probed.set(true);
                Ok(true)
            });
        assert!(!restricted);
        assert!(!probed.get());
    }

    #[test]
    fn ignore_chroot_false_still_probes() {
        let detector = OfflineDetector::new();
        let env = env_from(&[("VERBCTL_IGNORE_CHROOT", "no")]);
        assert!(detector.is_restricted_with(env, || Ok(true)));
    }

    #[test]
    fn probe_error_is_not_restricted() {
        let detector = OfflineDetector::new();
        let restricted = detector.is_restricted_with(env_from(&[]), || {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        });
        assert!(!restricted);
    }

    #[test]
    fn custom_prefix_is_honored() {
        let detector = OfflineDetector::with_prefix("PKGTOOL");
        let env = env_from(&[("VERBCTL_OFFLINE", "1"), ("PKGTOOL_OFFLINE", "0")]);
        assert!(!detector.is_restricted_with(env, || Ok(true)));
    }

    #[cfg(unix)]
    #[test]
    fn files_same_compares_identity() {
        let root = Path::new("/");
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
        assert!(files_same(root, root).unwrap());
        assert!(!files_same(root, manifest).unwrap());
    }

    #[test]
    fn running_in_chroot_does_not_panic() {
        let _ = running_in_chroot();
    }
}
