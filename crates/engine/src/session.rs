//! Session and identity.
//!
//! Resolves the current user from the store, handles signup/login/logout,
//! and applies account-settings updates. The service borrows the store for
//! the duration of an operation, so every mutation persists before the
//! caller regains control.

use std::path::PathBuf;

use dukkan_core::Username;

use crate::avatar;
use crate::models::{Package, PendingAction, User};
use crate::store::{StorageBackend, Store, StoreError};

/// Errors that can occur during session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Signup needs both a username and a password.
    #[error("username and password are required")]
    MissingCredentials,

    /// The requested username already has an account.
    #[error("username is already taken")]
    UsernameTaken,

    /// No account matches the given username and password.
    #[error("wrong username or password")]
    WrongCredentials,

    /// Persisting a record failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SessionError {
    /// The translation key of the user-visible message, when there is one.
    #[must_use]
    pub const fn message_key(&self) -> Option<&'static str> {
        match self {
            Self::MissingCredentials => Some("username_password_required"),
            Self::UsernameTaken => Some("signup_user_taken"),
            Self::WrongCredentials => Some("login_wrong"),
            Self::Store(_) => None,
        }
    }
}

/// Input to [`SessionService::signup`].
#[derive(Debug, Clone, Default)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    /// Human-facing name; defaults to the username when empty.
    pub display: Option<String>,
    /// Image to read for the avatar; a placeholder is generated otherwise.
    pub avatar_file: Option<PathBuf>,
    pub address: Option<String>,
}

/// Input to [`SessionService::update_account`].
///
/// Only supplied fields are applied; everything else is left untouched.
#[derive(Debug, Clone, Default)]
pub struct AccountUpdate {
    pub display: Option<String>,
    pub password: Option<String>,
    pub address: Option<String>,
    pub avatar_file: Option<PathBuf>,
    /// Replace the avatar with a fresh placeholder (the avatar field is
    /// never left empty).
    pub remove_avatar: bool,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: User,
    /// An interrupted flow to resume, consumed from the store exactly once.
    pub resume: Option<PendingAction>,
}

/// Session and account operations over a borrowed store.
pub struct SessionService<'a, B> {
    store: &'a mut Store<B>,
}

impl<'a, B: StorageBackend> SessionService<'a, B> {
    /// Create a session service borrowing the store.
    pub const fn new(store: &'a mut Store<B>) -> Self {
        Self { store }
    }

    /// Create an account and log it in.
    ///
    /// The avatar comes from the supplied file when it can be read (a read
    /// failure is logged and falls back to a placeholder), else a generated
    /// placeholder seeded by the username. The default free package record
    /// is established exactly once, on the first signup that finds none.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MissingCredentials`] when the username or
    /// password is empty, [`SessionError::UsernameTaken`] when an account
    /// with the username exists, or a [`StoreError`] from persistence.
    pub async fn signup(&mut self, request: SignupRequest) -> Result<User, SessionError> {
        let Ok(username) = Username::parse(&request.username) else {
            return Err(SessionError::MissingCredentials);
        };
        if request.password.is_empty() {
            return Err(SessionError::MissingCredentials);
        }

        let mut users = self.store.users();
        if users.iter().any(|u| u.username == username) {
            return Err(SessionError::UsernameTaken);
        }

        let mut avatar_data = None;
        if let Some(path) = &request.avatar_file {
            match avatar::read_file_to_data_url(path).await {
                Ok(data) => avatar_data = Some(data),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "avatar load failed");
                }
            }
        }
        let avatar_data =
            avatar_data.unwrap_or_else(|| avatar::placeholder(username.as_str()));

        let display = request
            .display
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(username.as_str())
            .to_owned();
        let address = request
            .address
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_owned);

        let user = User {
            username: username.clone(),
            password: request.password,
            display,
            avatar: Some(avatar_data),
            address,
        };
        users.push(user.clone());
        self.store.set_users(&users)?;
        self.store.set_current_user(&username)?;

        if self.store.package().is_none() {
            self.store.set_package(&Package::default_free())?;
        }

        Ok(user)
    }

    /// Log in with an exact username/password match.
    ///
    /// On success the session pointer moves to the username and any pending
    /// action marker is consumed (read-then-clear) for the caller to resume.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::WrongCredentials`] when no account matches;
    /// no state changes in that case.
    pub fn login(&mut self, username: &str, password: &str) -> Result<LoginOutcome, SessionError> {
        let Ok(username) = Username::parse(username) else {
            return Err(SessionError::WrongCredentials);
        };
        let user = self
            .store
            .users()
            .into_iter()
            .find(|u| u.username == username && u.password == password)
            .ok_or(SessionError::WrongCredentials)?;

        self.store.set_current_user(&username)?;
        let resume = self.store.take_pending_action()?;

        Ok(LoginOutcome { user, resume })
    }

    /// Clear the session pointer.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if clearing the pointer cannot be persisted.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.store.clear_current_user()?;
        Ok(())
    }

    /// Resolve the session pointer to a full user record.
    ///
    /// A pointer without a matching record yields a minimal stand-in (with
    /// a generated avatar, kept out of storage) rather than failing. A
    /// resolved record lacking an avatar gets a placeholder
    /// backfilled and persisted; a failed backfill write is logged and the
    /// in-memory record still carries the avatar.
    pub fn current_user(&mut self) -> Option<User> {
        let username = self.store.current_user()?;
        let mut users = self.store.users();
        let Some(index) = users.iter().position(|u| u.username == username) else {
            let mut user = User::stand_in(username);
            user.avatar = Some(avatar::placeholder(user.username.as_str()));
            return Some(user);
        };

        if users.get(index).is_some_and(|u| u.avatar.is_none()) {
            let generated = avatar::placeholder(username.as_str());
            if let Some(user) = users.get_mut(index) {
                user.avatar = Some(generated);
            }
            if let Err(error) = self.store.set_users(&users) {
                tracing::warn!(%error, "failed to persist backfilled avatar");
            }
        }

        users.into_iter().nth(index)
    }

    /// Apply an account-settings update.
    ///
    /// A missing user is a silent no-op reported as "nothing changed". Only
    /// supplied fields are applied; empty display/password inputs are
    /// treated as "not supplied". Returns whether anything actually changed,
    /// which drives the confirmation message downstream.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if persisting the updated list fails.
    pub async fn update_account(
        &mut self,
        username: &Username,
        update: AccountUpdate,
    ) -> Result<bool, SessionError> {
        let mut users = self.store.users();
        let Some(user) = users.iter_mut().find(|u| &u.username == username) else {
            return Ok(false);
        };

        let mut changed = false;

        if let Some(display) = update.display.as_deref().map(str::trim)
            && !display.is_empty()
        {
            user.display = display.to_owned();
            changed = true;
        }
        if let Some(password) = &update.password
            && !password.is_empty()
        {
            user.password.clone_from(password);
            changed = true;
        }
        if let Some(address) = update.address.as_deref().map(str::trim)
            && address != user.address.as_deref().unwrap_or_default()
        {
            user.address = Some(address.to_owned());
            changed = true;
        }

        if update.remove_avatar {
            // A fresh placeholder rather than an empty field.
            user.avatar = Some(avatar::placeholder(username.as_str()));
            changed = true;
        } else if let Some(path) = &update.avatar_file {
            match avatar::read_file_to_data_url(path).await {
                Ok(data) => {
                    user.avatar = Some(data);
                    changed = true;
                }
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "avatar save failed");
                }
            }
        }

        if changed {
            self.store.set_users(&users)?;
        }
        Ok(changed)
    }
}
