//! Session identity for lease owners.
//!
//! The lock core treats owners as opaque tokens supplied by the caller. This
//! module holds the two ways tokens are produced at the edge: a browser
//! session that has none yet gets a fresh UUID v4, and operator tooling uses
//! a `user@HOST` string.

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Opaque token identifying one editing session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap an existing token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Mint a fresh random session token.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Keep the token the session already carries, or mint one if it has none.
    ///
    /// An existing token is kept byte for byte.
    pub fn resolve(existing: Option<&str>) -> Self {
        match existing {
            Some(token) => Self::new(token),
            None => Self::generate(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Owner token for the local operator (e.g., `user@HOST`).
pub fn local_owner() -> SessionId {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    SessionId(format!("{}@{}", user, host))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_keeps_existing_token() {
        let id = SessionId::resolve(Some("abc-123"));
        assert_eq!(id.as_str(), "abc-123");
    }

    #[test]
    fn resolve_keeps_token_verbatim() {
        assert_eq!(SessionId::resolve(Some(" abc ")).as_str(), " abc ");
        assert_eq!(SessionId::resolve(Some("")).as_str(), "");
        assert_ne!(SessionId::resolve(Some(" abc")), SessionId::new("abc"));
    }

    #[test]
    fn resolve_mints_uuid_only_when_missing() {
        let minted = SessionId::resolve(None);
        assert!(Uuid::parse_str(minted.as_str()).is_ok());
    }

    #[test]
    fn generated_tokens_are_unique() {
        assert_ne!(SessionId::generate(), SessionId::generate());
    }

    #[test]
    fn local_owner_has_user_and_host() {
        let owner = local_owner();
        assert!(owner.as_str().contains('@'));
    }

    #[test]
    fn serializes_as_bare_string() {
        let json = serde_json::to_string(&SessionId::new("s1")).unwrap();
        assert_eq!(json, "\"s1\"");
    }
}
