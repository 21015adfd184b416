//! # Session persistence
//!
//! The session is the single source of truth for "who is logged in". It is
//! created from a login/register response, persisted to durable storage so
//! it survives reloads, and destroyed on logout.
//!
//! Two storage keys hold it, written and removed together:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`USER_KEY`] (`"trident_user"`) | JSON-serialized [`UserSummary`] |
//! | [`TOKEN_KEY`] (`"trident_token"`) | raw bearer token string |
//!
//! Restoring tolerates any storage failure: a missing key, unreadable
//! backend, or corrupt user record all yield a logged-out [`Session`].

use serde::{Deserialize, Serialize};

use crate::kv::KeyValueStore;

/// Storage key for the serialized user record.
pub const USER_KEY: &str = "trident_user";
/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "trident_token";

/// Account role assigned by the backend at registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Nonprofit,
    Researcher,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Nonprofit => "nonprofit",
            Role::Researcher => "researcher",
            Role::Admin => "admin",
        }
    }
}

/// The signed-in user as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Role-specific profile fields, opaque to the session layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<serde_json::Value>,
}

impl UserSummary {
    /// Display name, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// Whether the user has filled out their role profile.
    ///
    /// Admins have no profile to complete; everyone else needs a non-empty
    /// profile object before their dashboard unlocks matching features.
    pub fn is_profile_complete(&self) -> bool {
        if self.role == Role::Admin {
            return true;
        }
        matches!(&self.profile, Some(serde_json::Value::Object(map)) if !map.is_empty())
    }
}

/// Current authentication state: user and token are present together or
/// absent together.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<UserSummary>,
    pub token: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}

/// Reads and writes the persisted session through a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Restore the persisted session.
    ///
    /// Both halves must be present and the user record must parse; anything
    /// less is treated as logged out. Never panics.
    pub fn restore(&self) -> Session {
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let user = self.storage.get(USER_KEY).and_then(|raw| {
            serde_json::from_str::<UserSummary>(&raw)
                .map_err(|err| tracing::debug!("discarding stored user record: {err}"))
                .ok()
        });

        match (user, token) {
            (Some(user), Some(token)) => Session {
                user: Some(user),
                token: Some(token),
            },
            _ => Session::default(),
        }
    }

    /// Persist a fresh login and return the resulting session.
    pub fn login(&self, user: UserSummary, token: String) -> Session {
        match serde_json::to_string(&user) {
            Ok(record) => self.storage.set(USER_KEY, &record),
            Err(err) => tracing::warn!("failed to serialize user record: {err}"),
        }
        self.storage.set(TOKEN_KEY, &token);

        Session {
            user: Some(user),
            token: Some(token),
        }
    }

    /// Remove the persisted session. Idempotent.
    pub fn logout(&self) {
        self.storage.remove(USER_KEY);
        self.storage.remove(TOKEN_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    fn researcher() -> UserSummary {
        UserSummary {
            id: 1,
            name: "Test User".to_string(),
            email: "test@example.org".to_string(),
            role: Role::Researcher,
            profile: None,
        }
    }

    #[test]
    fn test_restore_empty_storage_is_logged_out() {
        let sessions = SessionStore::new(MemoryStore::new());
        let session = sessions.restore();
        assert!(session.user.is_none());
        assert!(session.token.is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_login_then_restore_round_trips() {
        let storage = MemoryStore::new();
        let sessions = SessionStore::new(storage.clone());

        let logged_in = sessions.login(researcher(), "test-token".to_string());
        assert!(logged_in.is_authenticated());

        // Simulates a reload: a fresh store over the same backend.
        let restored = SessionStore::new(storage).restore();
        assert_eq!(restored, logged_in);
    }

    #[test]
    fn test_logout_clears_both_keys() {
        let storage = MemoryStore::new();
        let sessions = SessionStore::new(storage.clone());
        sessions.login(researcher(), "test-token".to_string());

        sessions.logout();

        assert!(storage.get(USER_KEY).is_none());
        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(!sessions.restore().is_authenticated());

        // Logging out again is a no-op.
        sessions.logout();
    }

    #[test]
    fn test_restore_survives_corrupt_user_record() {
        let storage = MemoryStore::new();
        storage.set(USER_KEY, "{not json");
        storage.set(TOKEN_KEY, "orphan-token");

        let session = SessionStore::new(storage).restore();
        assert!(!session.is_authenticated());
        assert!(session.token.is_none());
    }

    #[test]
    fn test_restore_requires_both_halves() {
        let storage = MemoryStore::new();
        storage.set(
            USER_KEY,
            &serde_json::to_string(&researcher()).unwrap(),
        );

        // User record without a token is not a session.
        let session = SessionStore::new(storage.clone()).restore();
        assert!(!session.is_authenticated());
        assert!(session.user.is_none());

        // Empty token counts as absent.
        storage.set(TOKEN_KEY, "");
        assert!(!SessionStore::new(storage).restore().is_authenticated());
    }

    #[test]
    fn test_role_serialization_is_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Nonprofit).unwrap(), "\"nonprofit\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"admin\"").unwrap(),
            Role::Admin
        );
    }

    #[test]
    fn test_profile_completeness() {
        let mut user = researcher();
        assert!(!user.is_profile_complete());

        user.profile = Some(serde_json::json!({}));
        assert!(!user.is_profile_complete());

        user.profile = Some(serde_json::json!({
            "name": "Test", "bio": "Bio", "contact": "email@test.com"
        }));
        assert!(user.is_profile_complete());

        user.role = Role::Admin;
        user.profile = None;
        assert!(user.is_profile_complete());
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut user = researcher();
        assert_eq!(user.display_name(), "Test User");
        user.name = String::new();
        assert_eq!(user.display_name(), "test@example.org");
    }
}
