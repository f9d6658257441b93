//! Native Sign-In Capability
//!
//! The contract for the platform-native single-sign-on service. The native
//! SDK owns credential storage, token refresh, and the OAuth exchange; the
//! core only requests sessions and observes what comes back.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use crate::error::Result;

/// Opaque provider-issued identifier for an authenticated user.
///
/// The value is minted by the sign-in provider and carries no structure the
/// core is allowed to rely on.
///
/// # Examples
///
/// ```
/// use bridge_traits::SubjectId;
///
/// let subject = SubjectId::new("108417591234567890123");
/// assert_eq!(subject.as_str(), "108417591234567890123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectId(String);

impl SubjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SubjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SubjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Opaque credential handle attached to a session.
///
/// The core never inspects, persists, or refreshes the handle; it only
/// carries it between the capability and the application layer.
///
/// # Security
///
/// The `Debug` implementation redacts the inner value so handles never leak
/// into logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialHandle(String);

impl CredentialHandle {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Expose the raw handle for handoff to the application layer.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CredentialHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CredentialHandle")
            .field(&"[REDACTED]")
            .finish()
    }
}

/// An authenticated identity issued by the sign-in capability.
///
/// Sessions exist only transiently at startup; the capability's own storage
/// is the single source of truth across process restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Provider-issued user identifier.
    pub subject: SubjectId,
    /// Opaque credential/token handle.
    pub credential: CredentialHandle,
    /// Whether the capability considers the session currently valid.
    pub valid: bool,
}

impl Session {
    pub fn new(subject: impl Into<SubjectId>, credential: CredentialHandle) -> Self {
        Self {
            subject: subject.into(),
            credential,
            valid: true,
        }
    }

    /// Whether the session can back an authenticated UI state.
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// The platform-native sign-in service consumed as an opaque collaborator.
///
/// Implemented by host glue over the platform SDK. All protocol internals
/// (OAuth, token storage, cryptography) live behind this trait.
///
/// # Contract
///
/// - `restore_previous_session` resolves exactly once per call and is never
///   retried by the core.
/// - `handle_redirect` must be callable synchronously from within the OS
///   callback that delivered the URL; the capability alone tracks whether a
///   sign-in attempt is outstanding.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::signin::{Session, SignInCapability};
/// use bridge_traits::error::Result;
/// use async_trait::async_trait;
///
/// struct NativeSignIn;
///
/// #[async_trait]
/// impl SignInCapability for NativeSignIn {
///     async fn restore_previous_session(&self) -> Result<Option<Session>> {
///         // Calls into the platform SDK's silent sign-in
///         todo!()
///     }
///
///     async fn sign_in(&self) -> Result<Session> {
///         todo!()
///     }
///
///     fn handle_redirect(&self, url: &url::Url) -> bool {
///         let _ = url;
///         false
///     }
/// }
/// ```
#[async_trait::async_trait]
pub trait SignInCapability: Send + Sync {
    /// Attempt to silently re-establish a session from stored credentials.
    ///
    /// Returns `Ok(None)` when no prior session exists. Errors and `None`
    /// receive identical handling upstream: start logged out.
    async fn restore_previous_session(&self) -> Result<Option<Session>>;

    /// Start an interactive sign-in flow.
    ///
    /// The flow may leave the app for an external browser; the eventual
    /// redirect URL is fed back through [`handle_redirect`].
    ///
    /// [`handle_redirect`]: SignInCapability::handle_redirect
    async fn sign_in(&self) -> Result<Session>;

    /// Consume a callback URL delivered by the OS.
    ///
    /// Returns `true` when the URL belonged to an in-flight sign-in exchange
    /// and was consumed. Unrecognized URLs return `false` and are ignored.
    fn handle_redirect(&self, url: &Url) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_id_round_trip() {
        let subject = SubjectId::new("user-123");
        assert_eq!(subject.as_str(), "user-123");
        assert_eq!(subject.to_string(), "user-123");
        assert_eq!(SubjectId::from("user-123"), subject);
    }

    #[test]
    fn test_credential_handle_debug_redacts() {
        let handle = CredentialHandle::new("ya29.secret-token");
        let debug_str = format!("{:?}", handle);
        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains("secret-token"));
        assert_eq!(handle.expose(), "ya29.secret-token");
    }

    #[test]
    fn test_session_validity() {
        let session = Session::new("user-1", CredentialHandle::new("tok"));
        assert!(session.is_valid());

        let stale = Session {
            valid: false,
            ..session
        };
        assert!(!stale.is_valid());
    }

    #[test]
    fn test_session_serialization() {
        let session = Session::new("user-1", CredentialHandle::new("tok"));
        let json = serde_json::to_string(&session).unwrap();
        let deserialized: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(session, deserialized);
    }

    #[test]
    fn test_session_debug_redacts_credential() {
        let session = Session::new("user-1", CredentialHandle::new("tok-secret"));
        let debug_str = format!("{:?}", session);
        assert!(debug_str.contains("user-1"));
        assert!(!debug_str.contains("tok-secret"));
    }
}
