use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::register_user::{RegisterError, RegisterRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct RegisterRequestDto {
    /// Unique account name, 3-32 chars of letters/digits/underscores
    #[schema(example = "johndoe")]
    pub username: String,

    /// Password (stored only as an Argon2id hash)
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredUserResponse {
    pub id: String,
    pub username: String,
    pub avatar_url: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    request_body = RegisterRequestDto,
    responses(
        (status = 201, description = "Account created"),
        (status = 400, description = "Invalid username or password shape", body = ErrorResponse),
        (status = 409, description = "Username already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(username = %dto.username, "Registration attempt");

    let request = match RegisterRequest::new(dto.username, dto.password) {
        Ok(req) => req,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data.register_user_use_case.execute(request).await {
        Ok(user) => {
            info!(user_id = %user.id, username = %user.username, "User registered");

            ApiResponse::created(RegisteredUserResponse {
                id: user.id.to_string(),
                username: user.username,
                avatar_url: user.avatar_url,
                is_admin: user.is_admin,
                created_at: user.created_at,
            })
        }

        Err(RegisterError::UsernameTaken) => {
            warn!("Registration failed: username taken");
            ApiResponse::conflict("USERNAME_TAKEN", "Username already registered")
        }

        Err(RegisterError::HashingFailed(ref e)) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }

        Err(RegisterError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error during registration");
            ApiResponse::internal_error()
        }
    }
}
