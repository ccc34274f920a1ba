//! Advisory edit-lock subsystem.
//!
//! Prevents two editing sessions from modifying the same resource at once
//! using short-lived, self-expiring leases instead of a blocking mutex:
//! - [`Lease`]: owner session + creation time
//! - [`LockStore`]: concurrency-safe map of resource id to at most one lease
//! - [`Reaper`]: background sweep of expired leases
//! - [`LockManager`]: the facade request handlers call
//!
//! # Non-blocking
//!
//! `try_acquire` never waits. A denied caller gets [`AcquireOutcome::AlreadyHeld`]
//! and decides for itself whether to retry.
//!
//! # Expiry
//!
//! Leases are never renewed. Expiry is detected lazily by the reaper, so a
//! lease may outlive its duration by up to one sweep interval, during which
//! it still blocks other sessions.

mod lease;
mod manager;
mod reaper;
mod store;
mod types;


// Re-export public API
pub use lease::Lease;
pub use manager::LockManager;
pub use reaper::{Reaper, ReaperHandle};
pub use store::LockStore;
pub use types::{AcquireOutcome, LockEntry, ReleaseOutcome};
