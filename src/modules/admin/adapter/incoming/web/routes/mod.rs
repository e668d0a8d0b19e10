pub mod assign_admin;
pub mod revoke_admin;

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::User;

pub use assign_admin::assign_admin_handler;
pub use revoke_admin::revoke_admin_handler;

#[derive(Serialize, ToSchema)]
pub struct AdminTargetResponse {
    pub id: String,
    pub username: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for AdminTargetResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            is_admin: user.is_admin,
            created_at: user.created_at,
        }
    }
}
