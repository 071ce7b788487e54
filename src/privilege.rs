//! Privilege checks.

use crate::error::{Result, VerbError};

/// Check if running as root/admin.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(windows)]
    {
        std::env::var("ADMIN").is_ok()
    }

    #[cfg(not(any(unix, windows)))]
    {
        false
    }
}

/// Fail with [`VerbError::PermissionDenied`] unless running elevated.
pub fn must_be_root(verb: &str) -> Result<()> {
    if is_elevated() {
        return Ok(());
    }

    Err(VerbError::PermissionDenied {
        verb: verb.to_string(),
    })
}
