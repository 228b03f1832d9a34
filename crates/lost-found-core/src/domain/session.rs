//! Session Entity
//!
//! The signed-in identity and its bearer credential.

use serde::Serialize;

/// Authenticated identity held by the running client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub api_key: String,
}

/// Sign-in / sign-up request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Credentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Credentials {
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: None,
            email: email.into(),
            password: Some(password.into()),
        }
    }

    pub fn signup(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: email.into(),
            password: Some(password.into()),
        }
    }
}
