use serde::{Deserialize, Serialize};

/// Authenticated user as returned by the auth endpoints and shown in the
/// sidebar and settings page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
}

impl User {
    /// Uppercase initials for the avatar badge, e.g. "Ada Lovelace" -> "AL".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}
