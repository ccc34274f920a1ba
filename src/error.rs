//! Error types for editlease.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Routine lock outcomes (conflict, not-owner, not-found) are plain values in
//! [`crate::locks`]; they only become errors when a caller asks for it via
//! `into_result` or the commit re-validation path.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for editlease operations.
#[derive(Error, Debug)]
pub enum EditLockError {
    /// User provided invalid arguments or an unknown command.
    #[error("{0}")]
    UserError(String),

    /// Configuration could not be loaded or failed validation.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// The resource is locked by another editing session.
    #[error("{}, try again later", conflict_message(.resource))]
    Conflict { resource: String },

    /// The session's lease expired or was taken over before it committed.
    #[error("Edit lock on resource {resource} is no longer held by this session")]
    OwnershipLost { resource: String },

    /// The background reaper could not be started.
    #[error("Reaper failed: {0}")]
    ReaperError(String),
}

impl EditLockError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            EditLockError::UserError(_) => exit_codes::USER_ERROR,
            EditLockError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            EditLockError::Conflict { .. } => exit_codes::LOCK_CONFLICT,
            EditLockError::OwnershipLost { .. } => exit_codes::OWNERSHIP_LOST,
            EditLockError::ReaperError(_) => exit_codes::REAPER_FAILURE,
        }
    }
}

/// The user-facing text for a resource held by another session.
///
/// Names the resource, never the holder.
pub fn conflict_message(resource: &str) -> String {
    format!("Sorry, resource {} is being edited by another user", resource)
}

/// Result type alias for editlease operations.
pub type Result<T> = std::result::Result<T, EditLockError>;
