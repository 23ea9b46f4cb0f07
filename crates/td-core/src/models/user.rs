use serde::{Deserialize, Serialize};

/// Authenticated user identity, as established at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
}

impl User {
    /// The backend identifies users by username; the client reuses it for
    /// id, email and display name until a richer profile endpoint exists.
    pub fn from_username(username: &str) -> Self {
        Self {
            id: username.to_string(),
            email: username.to_string(),
            name: username.to_string(),
            avatar: None,
        }
    }
}
