//! Concurrency-safe lease map.

use super::lease::Lease;
use super::types::{AcquireOutcome, ReleaseOutcome};
use crate::session::SessionId;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Mapping from resource id to at most one [`Lease`].
///
/// Every operation runs entirely under one mutex, so operations touching the
/// same resource id are linearizable. A poisoned mutex is recovered: each
/// mutation is a single map insert or remove, so the map is never left
/// half-written.
#[derive(Debug, Default)]
pub struct LockStore {
    leases: Mutex<HashMap<String, Lease>>,
}

impl LockStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn leases(&self) -> MutexGuard<'_, HashMap<String, Lease>> {
        self.leases.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a lease for `owner` unless one already exists.
    ///
    /// An existing lease is reported as held even when it is expired but not
    /// yet swept. Nothing is mutated in that case.
    pub fn try_acquire(
        &self,
        resource: &str,
        owner: &SessionId,
        now: DateTime<Utc>,
    ) -> AcquireOutcome {
        let mut leases = self.leases();
        match leases.entry(resource.to_string()) {
            Entry::Occupied(held) => AcquireOutcome::AlreadyHeld {
                owner: held.get().owner().clone(),
            },
            Entry::Vacant(slot) => {
                slot.insert(Lease::new(owner.clone(), now));
                AcquireOutcome::Acquired
            }
        }
    }

    /// Remove the lease on `resource` if `owner` holds it.
    pub fn release(&self, resource: &str, owner: &SessionId) -> ReleaseOutcome {
        let mut leases = self.leases();
        let owned = match leases.get(resource) {
            None => return ReleaseOutcome::NotFound,
            Some(lease) => lease.owner() == owner,
        };

        if !owned {
            return ReleaseOutcome::NotOwner;
        }

        let removed = leases.remove(resource);
        debug_assert!(removed.is_some(), "lease vanished while the store was locked");
        ReleaseOutcome::Released
    }

    /// Remove every lease older than `lease_duration` and return how many went.
    pub fn sweep_expired(&self, now: DateTime<Utc>, lease_duration: Duration) -> usize {
        let mut leases = self.leases();
        let before = leases.len();
        leases.retain(|resource, lease| {
            let expired = lease.is_expired(now, lease_duration);
            if expired {
                debug!(resource = %resource, owner = %lease.owner(), "lease expired");
            }
            !expired
        });
        before - leases.len()
    }

    /// Copy of the lease on `resource`, if any.
    pub fn holder(&self, resource: &str) -> Option<Lease> {
        self.leases().get(resource).cloned()
    }

    /// Point-in-time copy of every entry, in no particular order.
    pub fn snapshot(&self) -> Vec<(String, Lease)> {
        self.leases()
            .iter()
            .map(|(resource, lease)| (resource.clone(), lease.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.leases().len()
    }

    pub fn is_empty(&self) -> bool {
        self.leases().is_empty()
    }
}
