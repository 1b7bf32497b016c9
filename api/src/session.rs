//! # Session — the single authoritative identity
//!
//! [`Session`] owns the logged-in user's [`Identity`] and mirrors it into
//! a durable [`SessionSlot`] so a reload restores the login. It is the
//! slot's only writer.
//!
//! State machine: `Uninitialized → {Anonymous, Authenticated}`.
//!
//! - [`Session::restore`] reads the slot at startup; a stored value that
//!   fails to parse is cleared and the session starts anonymous.
//! - [`Session::login`] runs the backend's two-step handshake: a boolean
//!   credential check, then a profile fetch by username. A structured 403
//!   surfaces verbatim as [`SessionError::Denied`]; a `false` check maps
//!   to [`SessionError::BadCredentials`]; anything else becomes a generic
//!   failure. State only changes on success.
//! - [`Session::logout`] is unconditional and cannot fail.
//!
//! The identity is normalized (dual `id`/`userId` reconciled) at every
//! boundary: on restore, after login, and after registration.

use store::SessionSlot;

use crate::gateway::Credentials;
use crate::models::{Identity, NewUser};
use crate::ApiError;

/// Failures surfaced by login and registration.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SessionError {
    /// The backend refused the account; message and reason are shown to
    /// the user verbatim.
    #[error("{message} - {reason}")]
    Denied { message: String, reason: String },

    /// The credential check returned `false`.
    #[error("Invalid username or password")]
    BadCredentials,

    /// Anything else; the text is already user-presentable.
    #[error("{0}")]
    Failed(String),
}

/// The process-wide session over a durable slot.
#[derive(Clone, Debug)]
pub struct Session<S> {
    slot: S,
    current: Option<Identity>,
}

impl<S: SessionSlot> Session<S> {
    /// Restore from the durable slot. A value that fails to parse is
    /// cleared so the next startup does not trip over it again.
    pub fn restore(slot: S) -> Self {
        let current = slot.load().and_then(|raw| {
            match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => Some(identity.normalize()),
                Err(e) => {
                    tracing::warn!("discarding unreadable stored session: {e}");
                    slot.clear();
                    None
                }
            }
        });
        Self { slot, current }
    }

    /// The authenticated identity, if any. Read-only to callers.
    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Moderator flag of the current identity; `false` when anonymous.
    pub fn is_moderator(&self) -> bool {
        self.current.as_ref().is_some_and(|u| u.is_moderator)
    }

    /// Two-step login: credential check, then profile fetch by username.
    pub async fn login(
        &mut self,
        api: &impl Credentials,
        username: &str,
        password: &str,
    ) -> Result<Identity, SessionError> {
        match api.check_login(username, password).await {
            Ok(true) => {}
            Ok(false) => return Err(SessionError::BadCredentials),
            Err(ApiError::Denied { message, reason }) => {
                return Err(SessionError::Denied { message, reason });
            }
            Err(e) => {
                tracing::error!("login check failed: {e}");
                return Err(SessionError::Failed(
                    "Login failed. Please try again.".to_string(),
                ));
            }
        }

        let identity = api.user_by_username(username).await.map_err(|e| {
            tracing::error!("profile fetch after login failed: {e}");
            SessionError::Failed("Login failed. Please try again.".to_string())
        })?;
        Ok(self.store(identity))
    }

    /// Create an account and log straight into it.
    pub async fn register(
        &mut self,
        api: &impl Credentials,
        new_user: &NewUser,
    ) -> Result<Identity, SessionError> {
        let identity = api.create_user(new_user).await.map_err(|e| {
            tracing::error!("registration failed: {e}");
            SessionError::Failed("Registration failed. Please try again.".to_string())
        })?;
        Ok(self.store(identity))
    }

    /// Adopt a freshly fetched copy of the identity (profile update or
    /// diagnostic refresh); normalized and persisted exactly like a
    /// login. Returns the normalized value.
    pub fn refresh(&mut self, identity: Identity) -> Identity {
        self.store(identity)
    }

    /// Unconditional: clears memory and the durable slot.
    pub fn logout(&mut self) {
        self.current = None;
        self.slot.clear();
    }

    fn store(&mut self, identity: Identity) -> Identity {
        let identity = identity.normalize();
        match serde_json::to_string(&identity) {
            Ok(raw) => self.slot.save(&raw),
            Err(e) => tracing::error!("session not persisted: {e}"),
        }
        self.current = Some(identity.clone());
        identity
    }
}

#[cfg(test)]
mod tests {
    use store::MemorySlot;

    use super::*;

    /// Scripted credential backend.
    struct StubAuth {
        check: Result<bool, ApiError>,
        lookup: Option<Identity>,
    }

    impl Credentials for StubAuth {
        async fn check_login(&self, _u: &str, _p: &str) -> Result<bool, ApiError> {
            match &self.check {
                Ok(v) => Ok(*v),
                Err(ApiError::Denied { message, reason }) => Err(ApiError::Denied {
                    message: message.clone(),
                    reason: reason.clone(),
                }),
                Err(_) => Err(ApiError::Status {
                    status: 500,
                    message: "boom".to_string(),
                }),
            }
        }

        async fn user_by_username(&self, _u: &str) -> Result<Identity, ApiError> {
            self.lookup.clone().ok_or(ApiError::Status {
                status: 404,
                message: "not found".to_string(),
            })
        }

        async fn create_user(&self, new_user: &NewUser) -> Result<Identity, ApiError> {
            self.lookup
                .clone()
                .map(|mut identity| {
                    identity.username = new_user.username.clone();
                    identity
                })
                .ok_or(ApiError::Status {
                    status: 500,
                    message: "boom".to_string(),
                })
        }
    }

    fn alice() -> Identity {
        Identity {
            id: Some(7),
            username: "a".to_string(),
            ..Identity::default()
        }
    }

    #[tokio::test]
    async fn test_login_success_persists_normalized_identity() {
        let slot = MemorySlot::new();
        let mut session = Session::restore(slot.clone());
        let api = StubAuth {
            check: Ok(true),
            lookup: Some(alice()),
        };

        let identity = session.login(&api, "a", "pw").await.unwrap();
        assert!(session.is_authenticated());
        assert_eq!(identity.id, Some(7));
        assert_eq!(identity.user_id, Some(7));

        let stored: Identity = serde_json::from_str(&slot.load().unwrap()).unwrap();
        assert_eq!(stored.id, Some(7));
        assert_eq!(stored.user_id, Some(7));
    }

    #[tokio::test]
    async fn test_login_false_check_leaves_slot_untouched() {
        let slot = MemorySlot::new();
        let mut session = Session::restore(slot.clone());
        let api = StubAuth {
            check: Ok(false),
            lookup: Some(alice()),
        };

        let err = session.login(&api, "a", "wrong").await.unwrap_err();
        assert_eq!(err, SessionError::BadCredentials);
        assert!(!session.is_authenticated());
        assert!(slot.load().is_none());
    }

    #[tokio::test]
    async fn test_login_denied_surfaces_message_and_reason() {
        let mut session = Session::restore(MemorySlot::new());
        let api = StubAuth {
            check: Err(ApiError::Denied {
                message: "Your account has been banned".to_string(),
                reason: "spam".to_string(),
            }),
            lookup: Some(alice()),
        };

        let err = session.login(&api, "a", "pw").await.unwrap_err();
        assert_eq!(
            err,
            SessionError::Denied {
                message: "Your account has been banned".to_string(),
                reason: "spam".to_string(),
            }
        );
        assert_eq!(err.to_string(), "Your account has been banned - spam");
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_transport_failure_is_generic() {
        let mut session = Session::restore(MemorySlot::new());
        let api = StubAuth {
            check: Err(ApiError::Status {
                status: 500,
                message: "boom".to_string(),
            }),
            lookup: None,
        };

        let err = session.login(&api, "a", "pw").await.unwrap_err();
        assert_eq!(
            err,
            SessionError::Failed("Login failed. Please try again.".to_string())
        );
    }

    #[tokio::test]
    async fn test_register_success_logs_in() {
        let slot = MemorySlot::new();
        let mut session = Session::restore(slot.clone());
        let api = StubAuth {
            check: Ok(true),
            lookup: Some(alice()),
        };

        let new_user = NewUser {
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            password: "secret".to_string(),
            phone_number: String::new(),
        };
        let identity = session.register(&api, &new_user).await.unwrap();
        assert_eq!(identity.username, "bob");
        assert!(session.is_authenticated());
        assert!(slot.load().is_some());
    }

    #[test]
    fn test_restore_roundtrip() {
        let slot = MemorySlot::new();
        slot.save(&serde_json::to_string(&alice()).unwrap());

        let session = Session::restore(slot);
        assert!(session.is_authenticated());
        let current = session.current().unwrap();
        assert_eq!(current.id, Some(7));
        assert_eq!(current.user_id, Some(7));
    }

    #[test]
    fn test_restore_clears_corrupt_slot() {
        let slot = MemorySlot::new();
        slot.save("{not json");

        let session = Session::restore(slot.clone());
        assert!(!session.is_authenticated());
        assert!(slot.load().is_none(), "corrupt value must be cleared");
    }

    #[test]
    fn test_logout_clears_memory_and_slot() {
        let slot = MemorySlot::new();
        slot.save(&serde_json::to_string(&alice()).unwrap());

        let mut session = Session::restore(slot.clone());
        assert!(session.is_authenticated());

        session.logout();
        assert!(!session.is_authenticated());
        assert!(!session.is_moderator());
        assert!(slot.load().is_none());
    }
}
