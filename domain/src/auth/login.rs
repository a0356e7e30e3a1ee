//! Fixed username/password used for the broker's password authentication

use serde::{Deserialize, Serialize};

/// Username and password submitted to the identity broker.
///
/// The advisor authenticates as one configured service user rather than as
/// the person chatting, so a single `Login` is shared by the whole process.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    pub username: String,
    pub password: String,
}

impl Login {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Both fields are present
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

impl std::fmt::Debug for Login {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Login")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_complete() {
        assert!(Login::new("advisor", "hunter2").is_complete());
        assert!(!Login::new("", "hunter2").is_complete());
        assert!(!Login::new("advisor", "").is_complete());
    }

    #[test]
    fn test_debug_hides_password() {
        let debug = format!("{:?}", Login::new("advisor", "hunter2"));
        assert!(debug.contains("advisor"));
        assert!(!debug.contains("hunter2"));
    }
}
