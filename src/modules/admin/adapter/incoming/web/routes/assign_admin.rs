use actix_web::{put, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::admin::adapter::incoming::web::routes::AdminTargetResponse;
use crate::admin::application::use_cases::grant_admin::GrantAdminError;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_admin_or_response, AuthenticatedUser,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Grant administrator rights to a user
#[utoipa::path(
    put,
    path = "/admin/assign-admin/{user_id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Target user, now an administrator"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Administrator privileges required", body = ErrorResponse),
        (status = 404, description = "Target user not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/admin/assign-admin/{user_id}")]
pub async fn assign_admin_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let admin = match resolve_admin_or_response(&data, &auth).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let target_user_id = path.into_inner();

    match data.grant_admin_use_case.execute(target_user_id).await {
        Ok(user) => {
            info!(
                target_user_id = %target_user_id,
                admin_id = %admin.id,
                "Administrator rights granted"
            );
            ApiResponse::success(AdminTargetResponse::from(user))
        }

        Err(GrantAdminError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(GrantAdminError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error granting admin");
            ApiResponse::internal_error()
        }
    }
}
