//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for the edit-lock subsystem.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Lease settings
    // =========================================================================
    /// Milliseconds a lease stays valid after acquisition. Leases are never
    /// renewed, so this bounds a single editing session.
    #[serde(default = "default_lease_duration_ms")]
    pub lease_duration_ms: u64,

    /// Milliseconds between reaper sweeps. An expired lease may linger for
    /// up to one interval before it is removed.
    #[serde(default = "default_sweep_interval_ms")]
    pub sweep_interval_ms: u64,

    // =========================================================================
    // Commit settings
    // =========================================================================
    /// Require the committing session to still hold an unexpired lease
    /// immediately before a write. Off by default: a save that arrives after
    /// the lease lapsed is accepted and its release is a silent no-op.
    #[serde(default)]
    pub revalidate_before_commit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lease_duration_ms: default_lease_duration_ms(),
            sweep_interval_ms: default_sweep_interval_ms(),
            revalidate_before_commit: false,
        }
    }
}
