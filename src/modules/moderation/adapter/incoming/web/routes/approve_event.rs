use actix_web::{put, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_admin_or_response, AuthenticatedUser,
};
use crate::event::adapter::incoming::web::routes::EventResponse;
use crate::moderation::application::use_cases::approve_event::ApproveEventError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Approve a submission: it becomes a published event and leaves the queue
#[utoipa::path(
    put,
    path = "/event-on-review/approve/{submission_id}",
    tag = "moderation",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The newly published event"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Administrator privileges required", body = ErrorResponse),
        (status = 404, description = "No pending submission with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/event-on-review/approve/{submission_id}")]
pub async fn approve_event_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let admin = match resolve_admin_or_response(&data, &auth).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let submission_id = path.into_inner();

    match data.approve_event_use_case.execute(submission_id).await {
        Ok(event) => {
            info!(
                submission_id = %submission_id,
                event_id = %event.id,
                admin_id = %admin.id,
                "Submission approved and published"
            );
            ApiResponse::success(EventResponse::from(event))
        }

        Err(ApproveEventError::NotFound) => {
            ApiResponse::not_found("SUBMISSION_NOT_FOUND", "Submission not found")
        }

        Err(ApproveEventError::RepositoryError(ref e)) => {
            error!(error = %e, submission_id = %submission_id, "Database error approving submission");
            ApiResponse::internal_error()
        }
    }
}
