//! Account store, session state and the remembered-email preference.
//!
//! The service is built once by the application bootstrap and handed to
//! every handler by reference. Accounts live only in memory; only the
//! remembered email goes through the [`PreferenceStore`].

use std::collections::HashMap;

use chrono::Utc;

use super::password::PasswordHasher;
use super::user::{User, UserId};
use crate::config::Config;
use crate::error::AuthError;
use crate::preferences::PreferenceStore;

/// Preference key holding the remembered login email.
pub const REMEMBERED_EMAIL_KEY: &str = "remembered_email";

/// Credentials of the account seeded when `seed_demo_account` is enabled.
const DEMO_ACCOUNT: (&str, &str, &str, &str) =
    ("1", "Ivan Petrov", "test@example.com", "password123");

/// Login, registration and session bookkeeping.
pub struct AuthService {
    users: HashMap<String, User>,
    /// Email of the signed-in user.
    current: Option<String>,
    preferences: Box<dyn PreferenceStore>,
    hasher: PasswordHasher,
    last_id: i64,
}

impl AuthService {
    /// Create an empty store.
    pub fn new(hasher: PasswordHasher, preferences: impl PreferenceStore + 'static) -> Self {
        Self {
            users: HashMap::new(),
            current: None,
            preferences: Box::new(preferences),
            hasher,
            last_id: 0,
        }
    }

    /// Create a store from configuration, seeding the demo account when enabled.
    ///
    /// Invalid `[security]` parameters fall back to the default hasher, and a
    /// failed seed leaves the store empty; both are logged.
    pub fn from_config(config: &Config, preferences: impl PreferenceStore + 'static) -> Self {
        let hasher = PasswordHasher::new(config.security).unwrap_or_else(|err| {
            tracing::error!(error = %err, "Invalid security settings, using defaults");
            PasswordHasher::default()
        });

        let mut service = Self::new(hasher, preferences);
        if config.accounts.seed_demo_account
            && let Err(err) = service.seed_demo_account()
        {
            tracing::error!(error = %err, "Could not seed demo account");
        }
        service
    }

    /// Insert the demonstration account unless its email is already taken.
    pub fn seed_demo_account(&mut self) -> Result<(), AuthError> {
        let (id, name, email, password) = DEMO_ACCOUNT;
        if self.users.contains_key(email) {
            return Ok(());
        }
        let hash = self.hasher.hash(password)?;
        self.users
            .insert(email.to_string(), User::new(UserId::new(id), name, email, hash));
        tracing::debug!(email, "Seeded demo account");
        Ok(())
    }

    // =========================================================================
    // AUTHENTICATION
    // =========================================================================

    /// Sign in. Succeeds iff `email` is registered and `password` matches.
    ///
    /// A failed attempt leaves the session untouched.
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        match self.authenticate(email, password) {
            Ok(()) => {
                self.current = Some(email.to_string());
                tracing::info!(email, "User signed in");
                true
            }
            Err(err) => {
                tracing::warn!(email, reason = %err, "Sign-in rejected");
                false
            }
        }
    }

    fn authenticate(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let user = self
            .users
            .get(email)
            .ok_or(AuthError::InvalidCredentials)?;
        if self.hasher.verify(password, user.password()) {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    /// Register a new account. Returns `false` when the email is taken.
    ///
    /// Does not sign the new user in.
    pub fn register(&mut self, name: &str, email: &str, password: &str) -> bool {
        match self.try_register(name, email, password) {
            Ok(_) => true,
            Err(err @ AuthError::EmailTaken { .. }) => {
                tracing::warn!(reason = %err, "Registration rejected");
                false
            }
            Err(err) => {
                tracing::error!(error = %err, "Registration failed");
                false
            }
        }
    }

    /// Register a new account, returning the stored record.
    pub fn try_register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<&User, AuthError> {
        if self.users.contains_key(email) {
            return Err(AuthError::EmailTaken {
                email: email.to_string(),
            });
        }

        let hash = self.hasher.hash(password)?;
        let id = self.next_id();
        tracing::info!(email, id = %id, "Registered account");

        let user = self
            .users
            .entry(email.to_string())
            .or_insert_with(|| User::new(id, name, email, hash));
        Ok(user)
    }

    /// Epoch milliseconds, bumped so ids stay strictly increasing.
    fn next_id(&mut self) -> UserId {
        let now = Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        UserId::new(self.last_id.to_string())
    }

    /// End the session. Idempotent.
    pub fn logout(&mut self) {
        if let Some(email) = self.current.take() {
            tracing::info!(email = %email, "User signed out");
        }
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.current
            .as_deref()
            .and_then(|email| self.users.get(email))
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// Look up an account by email.
    pub fn user(&self, email: &str) -> Option<&User> {
        self.users.get(email)
    }

    /// Number of registered accounts.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    // =========================================================================
    // REMEMBERED EMAIL
    // =========================================================================

    /// Persist `email` for pre-filling the login form.
    ///
    /// A failed write is logged; the session is unaffected either way.
    pub fn remember_email(&mut self, email: &str) {
        match self.preferences.put(REMEMBERED_EMAIL_KEY, email) {
            Ok(()) => tracing::debug!(email, "Remembered email"),
            Err(err) => tracing::warn!(error = %err, "Could not remember email"),
        }
    }

    pub fn remembered_email(&self) -> Option<String> {
        self.preferences.get(REMEMBERED_EMAIL_KEY)
    }

    /// Drop the remembered email.
    pub fn forget_email(&mut self) {
        if let Err(err) = self.preferences.remove(REMEMBERED_EMAIL_KEY) {
            tracing::warn!(error = %err, "Could not forget email");
        }
    }
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("users", &self.users.len())
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}
