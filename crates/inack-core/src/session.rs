//! Client-side session state.

use serde::{Deserialize, Serialize};

/// The client-side record of the current authentication status.
///
/// Holds at most one bearer token; "authenticated" is derived from its
/// presence, there is no separate flag to drift out of sync. Constructed at
/// startup from whatever the token store persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// A fresh, unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session restored from a persisted token, if one was stored.
    pub fn from_token(token: Option<String>) -> Self {
        Self { token }
    }

    /// Whether a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Stores the token obtained from a successful login.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Drops the token, ending the session.
    pub fn clear(&mut self) {
        self.token = None;
    }
}

/// Login/register request body. Serializes exactly as
/// `{"username":...,"password":...}`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}
