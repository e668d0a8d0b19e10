use actix_web::{put, web, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::admin::adapter::incoming::web::routes::AdminTargetResponse;
use crate::admin::application::use_cases::revoke_admin::RevokeAdminError;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_admin_or_response, AuthenticatedUser,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Revoke administrator rights from a user (never from yourself)
#[utoipa::path(
    put,
    path = "/admin/revoke-admin/{user_id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Target user, no longer an administrator"),
        (status = 400, description = "Attempted self-revocation", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Administrator privileges required", body = ErrorResponse),
        (status = 404, description = "Target user not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/admin/revoke-admin/{user_id}")]
pub async fn revoke_admin_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let admin = match resolve_admin_or_response(&data, &auth).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let target_user_id = path.into_inner();

    match data
        .revoke_admin_use_case
        .execute(target_user_id, admin.id)
        .await
    {
        Ok(user) => {
            info!(
                target_user_id = %target_user_id,
                admin_id = %admin.id,
                "Administrator rights revoked"
            );
            ApiResponse::success(AdminTargetResponse::from(user))
        }

        Err(RevokeAdminError::SelfRevocationDenied) => {
            warn!(admin_id = %admin.id, "Admin attempted self-revocation");
            ApiResponse::bad_request(
                "SELF_REVOCATION",
                "Cannot revoke your own administrator privileges",
            )
        }

        Err(RevokeAdminError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(RevokeAdminError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error revoking admin");
            ApiResponse::internal_error()
        }
    }
}
