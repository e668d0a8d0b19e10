use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_admin_or_response, AuthenticatedUser,
};
use crate::moderation::adapter::incoming::web::routes::ReviewEventResponse;
use crate::moderation::application::use_cases::list_pending::ListPendingError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Submissions awaiting review (administrators only)
#[utoipa::path(
    get,
    path = "/event-on-review/on-review",
    tag = "moderation",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Everything currently Submitted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Administrator privileges required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/event-on-review/on-review")]
pub async fn list_pending_handler(
    auth: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(response) = resolve_admin_or_response(&data, &auth).await {
        return response;
    }

    match data.list_pending_use_case.execute().await {
        Ok(pending) => {
            let response: Vec<ReviewEventResponse> = pending
                .into_iter()
                .map(ReviewEventResponse::from)
                .collect();
            ApiResponse::success(response)
        }

        Err(ListPendingError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error listing pending submissions");
            ApiResponse::internal_error()
        }
    }
}
