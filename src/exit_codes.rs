//! Exit code constants for the editlease CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, bad shell command)
//! - 2: Configuration error
//! - 3: Lock conflict (resource edited by another session)
//! - 4: Ownership lost before commit
//! - 5: Reaper failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an unknown shell command.
pub const USER_ERROR: i32 = 1;

/// Configuration could not be read, parsed or validated.
pub const CONFIG_ERROR: i32 = 2;

/// A lease on the resource is held by another session.
pub const LOCK_CONFLICT: i32 = 3;

/// The session no longer holds the lease it is committing under.
pub const OWNERSHIP_LOST: i32 = 4;

/// The background reaper could not be started.
pub const REAPER_FAILURE: i32 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USER_ERROR,
            CONFIG_ERROR,
            LOCK_CONFLICT,
            OWNERSHIP_LOST,
            REAPER_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }
}
