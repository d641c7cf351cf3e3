use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use super::errors::{AuthError, AuthResult};

/// The single administrator account
///
/// The password is hashed with bcrypt as soon as the account is built; the
/// plaintext is never stored. The time of the last successful login is kept
/// so the admin can see when the account was previously used.
#[derive(Debug)]
pub struct AdminCredentials {
    username: String,
    password_hash: String,
    last_login: Mutex<Option<DateTime<Utc>>>,
}

impl AdminCredentials {
    /// Builds the account from configured credentials
    ///
    /// # Example
    /// ```
    /// use esports_registration_api::auth::AdminCredentials;
    ///
    /// let admin = AdminCredentials::with_cost("admin", "hunter2", 4).expect("valid hash");
    /// assert!(admin.verify("admin", "hunter2").unwrap());
    /// assert!(!admin.verify("admin", "wrong").unwrap());
    /// ```
    pub fn new(username: impl Into<String>, password: &str) -> AuthResult<Self> {
        Self::with_cost(username, password, DEFAULT_COST)
    }

    /// Like [`AdminCredentials::new`] with an explicit bcrypt cost
    pub fn with_cost(username: impl Into<String>, password: &str, cost: u32) -> AuthResult<Self> {
        Ok(Self {
            username: username.into(),
            password_hash: hash(password, cost)?,
            last_login: Mutex::new(None),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Checks a username/password pair against the account
    ///
    /// The bcrypt check always runs, so a wrong username costs as much as a
    /// wrong password.
    pub fn verify(&self, username: &str, password: &str) -> AuthResult<bool> {
        let password_matches = verify(password, &self.password_hash)?;
        Ok(password_matches && username == self.username)
    }

    /// Verifies the pair and records the login
    ///
    /// # Returns
    /// * `Ok(previous)` - Timestamp of the previous login, `None` on first access
    /// * `Err(AuthError::InvalidCredentials)` - Username or password mismatch
    pub async fn login(&self, username: &str, password: &str) -> AuthResult<Option<DateTime<Utc>>> {
        if !self.verify(username, password)? {
            return Err(AuthError::InvalidCredentials);
        }

        let mut last_login = self.last_login.lock().await;
        Ok(last_login.replace(Utc::now()))
    }
}
