//! editlease: advisory, self-expiring edit locks.
//!
//! A web editor's handlers call [`locks::LockManager`] to take a short-lived
//! lease on a resource before editing it and to release it after saving. A
//! [`locks::Reaper`] thread removes leases nobody came back for.
//!
//! ```no_run
//! use editlease::config::Config;
//! use editlease::locks::{LockManager, Reaper};
//! use editlease::session::SessionId;
//! use std::sync::Arc;
//!
//! # fn main() -> editlease::error::Result<()> {
//! let manager = Arc::new(LockManager::new(Config::default()));
//! let _reaper = Reaper::new(Arc::clone(&manager)).spawn()?;
//!
//! let session = SessionId::resolve(None);
//! manager.try_acquire("42", &session).into_result("42")?;
//! // ... write the resource ...
//! manager.finish_edit("42", &session)?;
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod locks;
pub mod session;
