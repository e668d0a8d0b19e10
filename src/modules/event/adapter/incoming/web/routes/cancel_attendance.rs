use actix_web::{post, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::event::adapter::incoming::web::routes::StatusResponse;
use crate::event::application::use_cases::cancel_attendance::CancelAttendanceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Leave an event's attendance roster
#[utoipa::path(
    post,
    path = "/events/{event_id}/cancel",
    tag = "events",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Attendance cancelled"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 409, description = "Not joined", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/events/{event_id}/cancel")]
pub async fn cancel_attendance_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user = match resolve_current_user_or_response(&data, &auth).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let event_id = path.into_inner();

    match data
        .cancel_attendance_use_case
        .execute(event_id, user.id)
        .await
    {
        Ok(()) => {
            info!(event_id = %event_id, user_id = %user.id, "User left event");
            ApiResponse::success(StatusResponse {
                status: "cancelled",
            })
        }

        Err(CancelAttendanceError::NotFound) => {
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }

        Err(CancelAttendanceError::NotJoined) => {
            ApiResponse::conflict("NOT_JOINED", "Not joined to this event")
        }

        Err(CancelAttendanceError::RepositoryError(ref e)) => {
            error!(error = %e, event_id = %event_id, "Database error leaving event");
            ApiResponse::internal_error()
        }
    }
}
