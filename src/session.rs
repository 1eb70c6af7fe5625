//! Session Store
//!
//! Bearer token and user profile, mirrored into key-value storage.
//! Token and user are always both present or both absent.

use crate::config::{TOKEN_KEY, USER_KEY};
use crate::error::AppResult;
use crate::models::{Session, User};
use crate::storage::KeyValueStore;

pub struct SessionStore<S> {
    storage: S,
    current: Option<Session>,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage, current: None }
    }

    /// Load the persisted session, if both slots hold usable values.
    ///
    /// A half-written or unparseable session is wiped from storage.
    pub fn restore(&mut self) -> Option<&Session> {
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let user = self
            .storage
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str::<User>(&raw).ok());

        match (token, user) {
            (Some(token), Some(user)) => {
                log::info!("[SESSION] restored session for {}", user.email);
                self.current = Some(Session { token, user });
            }
            (None, None) => {
                self.current = None;
            }
            _ => {
                log::warn!("[SESSION] discarding incomplete persisted session");
                self.wipe_storage();
                self.current = None;
            }
        }
        self.current.as_ref()
    }

    /// Set the session in memory and in storage.
    ///
    /// The in-memory session applies even if persisting fails; the error is
    /// returned so the caller can log it.
    pub fn establish(&mut self, token: String, user: User) -> AppResult<()> {
        log::info!("[SESSION] established for {}", user.email);
        let persisted = self.persist(&token, &user);
        if persisted.is_err() {
            self.wipe_storage();
        }
        self.current = Some(Session { token, user });
        persisted
    }

    /// Drop the session from memory and storage
    pub fn clear(&mut self) {
        log::info!("[SESSION] cleared");
        self.current = None;
        self.wipe_storage();
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    #[cfg(test)]
    pub fn user(&self) -> Option<&User> {
        self.current.as_ref().map(|s| &s.user)
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&self, token: &str, user: &User) -> AppResult<()> {
        let user_json = serde_json::to_string(user)?;
        self.storage.set(TOKEN_KEY, token)?;
        self.storage.set(USER_KEY, &user_json)
    }

    fn wipe_storage(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}
