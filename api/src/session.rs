//! Persisted authentication session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Storage presence is the only notion of "logged in" the client has: there is
//! no expiry check and no server validation here. A token the backend has
//! revoked stays "valid" until a request using it fails.
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail. A malformed user record is logged and treated as absent
//! so a corrupted entry can't wedge startup.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::storage::SessionStorage;
use crate::types::{LoginResponse, TokenRefresh, UserProfile};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_KEY: &str = "user";

/// Every key the session writes.
pub const SESSION_KEYS: [&str; 3] = [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY];

/// Token pair plus the cached profile of the signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserProfile,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Self {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            user: response.user,
        }
    }
}

/// Typed view over the three session keys in a [`SessionStorage`].
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Underlying storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// True iff both an access token and a user record are stored.
    pub fn is_authenticated(&self) -> bool {
        self.present(ACCESS_TOKEN_KEY).is_some() && self.present(USER_KEY).is_some()
    }

    /// Stored user profile, or `None` if absent or unparseable.
    pub fn current_user(&self) -> Option<UserProfile> {
        let raw = self.present(USER_KEY)?;
        match serde_json::from_str::<UserProfile>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("ignoring malformed stored user record: {e}");
                None
            }
        }
    }

    pub fn access_token(&self) -> Option<String> {
        self.present(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.present(REFRESH_TOKEN_KEY)
    }

    /// The whole session, if every part is present and the user parses.
    pub fn load(&self) -> Option<Session> {
        Some(Session {
            access_token: self.access_token()?,
            refresh_token: self.refresh_token()?,
            user: self.current_user()?,
        })
    }

    /// Persist all three parts of `session`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the user cannot be serialized or any write
    /// is refused. Keys this call already wrote get their previous values
    /// back, so an earlier session survives a failed save.
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        let user = serde_json::to_string(&session.user).map_err(|e| StorageError::Serialize {
            key: USER_KEY.to_owned(),
            reason: e.to_string(),
        })?;
        let writes = [
            (ACCESS_TOKEN_KEY, session.access_token.as_str()),
            (REFRESH_TOKEN_KEY, session.refresh_token.as_str()),
            (USER_KEY, user.as_str()),
        ];
        let previous = writes.map(|(key, _)| self.storage.get(key));
        for (written, (key, value)) in writes.iter().enumerate() {
            if let Err(e) = self.storage.set(key, value) {
                self.restore(&writes[..written], &previous[..written]);
                return Err(e);
            }
        }
        Ok(())
    }

    fn restore(&self, writes: &[(&str, &str)], previous: &[Option<String>]) {
        for ((key, _), old) in writes.iter().zip(previous) {
            match old {
                Some(old) => {
                    if let Err(e) = self.storage.set(key, old) {
                        log::warn!("failed to restore `{key}` after aborted save: {e}");
                    }
                }
                None => self.storage.remove(key),
            }
        }
    }

    /// Replace the stored tokens after a refresh, keeping the user record.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if a write is refused.
    pub fn save_tokens(&self, tokens: &TokenRefresh) -> Result<(), StorageError> {
        self.storage.set(ACCESS_TOKEN_KEY, &tokens.access_token)?;
        if let Some(refresh) = &tokens.refresh_token {
            self.storage.set(REFRESH_TOKEN_KEY, refresh)?;
        }
        Ok(())
    }

    /// Remove every session key.
    pub fn clear(&self) {
        for key in SESSION_KEYS {
            self.storage.remove(key);
        }
    }

    fn present(&self, key: &str) -> Option<String> {
        self.storage.get(key).filter(|value| !value.is_empty())
    }
}
