//! Configuration defaults for editlease.
//!
//! Default value functions used by serde and by `Config::default`.

/// Default lease duration: one minute.
pub const DEFAULT_LEASE_DURATION_MS: u64 = 60_000;

/// Default reaper tick: five seconds.
pub const DEFAULT_SWEEP_INTERVAL_MS: u64 = 5_000;

// Default value functions for serde
pub(crate) fn default_lease_duration_ms() -> u64 {
    DEFAULT_LEASE_DURATION_MS
}
pub(crate) fn default_sweep_interval_ms() -> u64 {
    DEFAULT_SWEEP_INTERVAL_MS
}
