use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-user profile document. `id` lives in the same id space as the
/// identity provider's user id. `bonus_points` is the authoritative
/// reward balance, incremented by passing quiz attempts.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bonus_points: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Profile {
    pub fn new(id: &str, username: Option<&str>, full_name: Option<&str>) -> Self {
        Profile {
            id: id.to_string(),
            username: username.map(|v| v.to_string()),
            full_name: full_name.map(|v| v.to_string()),
            avatar_url: None,
            bonus_points: 0,
            created_at: Some(Utc::now()),
        }
    }

    /// Username, falling back to full name, falling back to "User".
    pub fn display_name(&self) -> String {
        self.username
            .clone()
            .or_else(|| self.full_name.clone())
            .unwrap_or_else(|| "User".to_string())
    }
}
