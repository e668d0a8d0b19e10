use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::fetch_profile::FetchProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct UserProfileResponse {
    pub id: String,
    pub username: String,
    pub avatar_url: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// Profile of the authenticated user
#[utoipa::path(
    get,
    path = "/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user profile"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Token subject no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/me")]
pub async fn get_me_handler(auth: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.fetch_profile_use_case.execute(auth.user_id).await {
        Ok(profile) => ApiResponse::success(UserProfileResponse {
            id: profile.id.to_string(),
            username: profile.username,
            avatar_url: profile.avatar_url,
            is_admin: profile.is_admin,
            created_at: profile.created_at,
        }),

        Err(FetchProfileError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(FetchProfileError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error fetching profile");
            ApiResponse::internal_error()
        }
    }
}
