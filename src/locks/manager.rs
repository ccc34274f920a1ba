//! Lock manager facade used by request handlers.

use super::store::LockStore;
use super::types::{AcquireOutcome, LockEntry, ReleaseOutcome};
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::error::{EditLockError, Result};
use crate::session::SessionId;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::debug;

/// Policy layer over [`LockStore`].
///
/// Build one at process start and share it (as `Arc<LockManager>`) with
/// every handler and with the [`Reaper`](super::Reaper).
pub struct LockManager {
    store: LockStore,
    clock: Arc<dyn Clock>,
    config: Config,
}

impl LockManager {
    /// Create a manager on the wall clock.
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: LockStore::new(),
            clock,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Try to take the edit lock on `resource` for `session`.
    ///
    /// Re-acquiring a lease the session already holds succeeds without
    /// touching its timestamp, so an owner can open the editor repeatedly.
    pub fn try_acquire(&self, resource: &str, session: &SessionId) -> AcquireOutcome {
        match self.store.try_acquire(resource, session, self.now()) {
            AcquireOutcome::Acquired => {
                debug!(resource, session = %session, "lease acquired");
                AcquireOutcome::Acquired
            }
            AcquireOutcome::AlreadyHeld { owner } if &owner == session => {
                debug!(resource, session = %session, "lease re-entered by owner");
                AcquireOutcome::Acquired
            }
            AcquireOutcome::AlreadyHeld { owner } => {
                debug!(resource, session = %session, owner = %owner, "lease conflict");
                AcquireOutcome::AlreadyHeld { owner }
            }
        }
    }

    /// Release `session`'s lease on `resource`.
    ///
    /// `NotOwner` and `NotFound` are expected when an edit finishes after
    /// its lease lapsed; callers may ignore them.
    pub fn release(&self, resource: &str, session: &SessionId) -> ReleaseOutcome {
        let outcome = self.store.release(resource, session);
        match outcome {
            ReleaseOutcome::Released => debug!(resource, session = %session, "lease released"),
            ReleaseOutcome::NotOwner | ReleaseOutcome::NotFound => {
                debug!(resource, session = %session, ?outcome, "release ignored")
            }
        }
        outcome
    }

    /// Held locks sorted by resource id.
    pub fn list(&self) -> Vec<LockEntry> {
        let mut entries: Vec<LockEntry> = self
            .store
            .snapshot()
            .into_iter()
            .map(|(resource, lease)| LockEntry { resource, lease })
            .collect();
        entries.sort_by(|a, b| a.resource.cmp(&b.resource));
        entries
    }

    /// Plain-text listing, one line per held lock.
    pub fn render_list(&self) -> String {
        self.list()
            .iter()
            .map(|entry| format!("{}\n", entry))
            .collect()
    }

    /// Remove expired leases as of now. Returns the number removed.
    pub fn sweep_expired(&self) -> usize {
        self.store
            .sweep_expired(self.now(), self.config.lease_duration())
    }

    /// Check, right before a write commits, that `session` may still write.
    ///
    /// Always passes unless `revalidate_before_commit` is set. With it set,
    /// the session must hold an unexpired lease on `resource`.
    pub fn check_commit(&self, resource: &str, session: &SessionId) -> Result<()> {
        if !self.config.revalidate_before_commit {
            return Ok(());
        }

        let now = self.now();
        match self.store.holder(resource) {
            Some(lease)
                if lease.owner() == session
                    && !lease.is_expired(now, self.config.lease_duration()) =>
            {
                Ok(())
            }
            _ => Err(EditLockError::OwnershipLost {
                resource: resource.to_string(),
            }),
        }
    }

    /// Finish an edit after the write: re-validate if configured, then release.
    pub fn finish_edit(&self, resource: &str, session: &SessionId) -> Result<ReleaseOutcome> {
        self.check_commit(resource, session)?;
        Ok(self.release(resource, session))
    }

    pub fn store(&self) -> &LockStore {
        &self.store
    }
}
