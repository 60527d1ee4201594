//! Auth session state

use serde::{Deserialize, Serialize};

use super::user::User;

/// The single auth session: a nullable user plus an authenticated flag.
///
/// Invariant: `is_authenticated` is true iff `user` is set. The constructors
/// are the only way to build a session, so the pair cannot drift apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    user: Option<User>,
    is_authenticated: bool,
}

impl AuthSession {
    /// An authenticated session for the given user
    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
        }
    }

    /// The logged-out state
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn user_mut(&mut self) -> Option<&mut User> {
        self.user.as_mut()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// Repair a session restored from persistence so the flag matches the
    /// user. A hand-edited or truncated blob could disagree; the user field
    /// wins.
    pub fn normalized(mut self) -> Self {
        self.is_authenticated = self.user.is_some();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_anonymous() {
        let session = AuthSession::default();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_normalized_repairs_flag() {
        // Simulate a blob where the flag was left true but the user is gone
        let json = r#"{"user":null,"isAuthenticated":true}"#;
        let session: AuthSession = serde_json::from_str(json).unwrap();
        let session = session.normalized();
        assert!(!session.is_authenticated());
    }
}
