use std::fmt;

use serde::{Deserialize, Serialize};

/// Credentials handed to the login handler on a valid submission
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
    pub remember_me: bool,
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

/// Public information about a signed-in user (safe to expose to frontend)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignedInUser {
    pub username: String,
    pub remember_me: bool,
}
