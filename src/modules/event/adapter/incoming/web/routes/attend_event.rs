use actix_web::{post, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::event::adapter::incoming::web::routes::StatusResponse;
use crate::event::application::use_cases::attend_event::AttendEventError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Join an event's attendance roster
#[utoipa::path(
    post,
    path = "/events/{event_id}/attend",
    tag = "events",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Joined"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 409, description = "Already joined", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/events/{event_id}/attend")]
pub async fn attend_event_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user = match resolve_current_user_or_response(&data, &auth).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let event_id = path.into_inner();

    match data.attend_event_use_case.execute(event_id, user.id).await {
        Ok(()) => {
            info!(event_id = %event_id, user_id = %user.id, "User joined event");
            ApiResponse::success(StatusResponse { status: "joined" })
        }

        Err(AttendEventError::NotFound) => {
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }

        Err(AttendEventError::AlreadyJoined) => {
            ApiResponse::conflict("ALREADY_JOINED", "Already joined this event")
        }

        Err(AttendEventError::RepositoryError(ref e)) => {
            error!(error = %e, event_id = %event_id, "Database error joining event");
            ApiResponse::internal_error()
        }
    }
}
