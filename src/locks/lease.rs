//! Lease value object.

use crate::session::SessionId;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// A time-bounded advisory claim on one resource by one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lease {
    /// Session that holds the lease.
    owner: SessionId,

    /// When the lease was acquired (RFC3339 when serialized).
    created_at: DateTime<Utc>,
}

impl Lease {
    pub(crate) fn new(owner: SessionId, created_at: DateTime<Utc>) -> Self {
        Self { owner, created_at }
    }

    pub fn owner(&self) -> &SessionId {
        &self.owner
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Time elapsed since acquisition.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now.signed_duration_since(self.created_at)
    }

    /// A lease expires once it is strictly older than `lease_duration`.
    pub fn is_expired(&self, now: DateTime<Utc>, lease_duration: Duration) -> bool {
        self.age(now) > lease_duration
    }
}
