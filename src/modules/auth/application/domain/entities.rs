use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Account record as the application sees it. `is_admin` is only ever
/// mutated through the admin role use cases.
#[derive(Debug, Clone, serde::Serialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub avatar_url: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}
