use actix_web::{put, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_admin_or_response, AuthenticatedUser,
};
use crate::moderation::adapter::incoming::web::routes::ModerationStatusResponse;
use crate::moderation::application::use_cases::reject_event::RejectEventError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Reject a submission: it leaves the queue and nothing is published
#[utoipa::path(
    put,
    path = "/event-on-review/reject/{submission_id}",
    tag = "moderation",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Submission rejected and removed"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Administrator privileges required", body = ErrorResponse),
        (status = 404, description = "No pending submission with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/event-on-review/reject/{submission_id}")]
pub async fn reject_event_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let admin = match resolve_admin_or_response(&data, &auth).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let submission_id = path.into_inner();

    match data.reject_event_use_case.execute(submission_id).await {
        Ok(()) => {
            info!(
                submission_id = %submission_id,
                admin_id = %admin.id,
                "Submission rejected"
            );
            ApiResponse::success(ModerationStatusResponse { status: "rejected" })
        }

        Err(RejectEventError::NotFound) => {
            ApiResponse::not_found("SUBMISSION_NOT_FOUND", "Submission not found")
        }

        Err(RejectEventError::RepositoryError(ref e)) => {
            error!(error = %e, submission_id = %submission_id, "Database error rejecting submission");
            ApiResponse::internal_error()
        }
    }
}
