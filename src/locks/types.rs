//! Outcomes of lock operations and the diagnostic listing entry.

use super::lease::Lease;
use crate::error::{EditLockError, Result, conflict_message};
use crate::session::SessionId;
use chrono::SecondsFormat;
use serde::Serialize;
use std::fmt;

/// Result of an acquire attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquireOutcome {
    /// The caller holds the lease and may edit.
    Acquired,
    /// Another session holds the lease.
    AlreadyHeld { owner: SessionId },
}

impl AcquireOutcome {
    pub fn is_acquired(&self) -> bool {
        matches!(self, AcquireOutcome::Acquired)
    }

    /// HTTP status a handler should answer with: 200, or 423 Locked.
    pub fn http_status(&self) -> u16 {
        match self {
            AcquireOutcome::Acquired => 200,
            AcquireOutcome::AlreadyHeld { .. } => 423,
        }
    }

    /// Message to show the user when the acquire failed, `None` on success.
    pub fn user_message(&self, resource: &str) -> Option<String> {
        match self {
            AcquireOutcome::Acquired => None,
            AcquireOutcome::AlreadyHeld { .. } => Some(conflict_message(resource)),
        }
    }

    /// Turn a conflict into an error so handlers can use `?`.
    ///
    /// The error names the resource but not the blocking owner.
    pub fn into_result(self, resource: &str) -> Result<()> {
        match self {
            AcquireOutcome::Acquired => Ok(()),
            AcquireOutcome::AlreadyHeld { .. } => Err(EditLockError::Conflict {
                resource: resource.to_string(),
            }),
        }
    }
}

/// Result of a release attempt.
///
/// Only `Released` mutates the store. Callers on the save path treat the
/// other two as benign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    Released,
    /// The lease belongs to a different session and was left in place.
    NotOwner,
    /// No lease exists (never acquired, already released, or reaped).
    NotFound,
}

/// One held lock in the diagnostic listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LockEntry {
    pub resource: String,
    pub lease: Lease,
}

impl fmt::Display for LockEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "resource {}, held by {}, since {}",
            self.resource,
            self.lease.owner(),
            self.lease
                .created_at()
                .to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }
}
