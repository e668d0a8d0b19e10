use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::event::adapter::incoming::web::routes::ParticipantResponse;
use crate::event::application::use_cases::list_participants::ListParticipantsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Attendance roster of an event (public)
#[utoipa::path(
    get,
    path = "/events/{event_id}/participants",
    tag = "events",
    responses(
        (status = 200, description = "User summaries of everyone joined"),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/events/{event_id}/participants")]
pub async fn list_participants_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let event_id = path.into_inner();

    match data.list_participants_use_case.execute(event_id).await {
        Ok(roster) => {
            let response: Vec<ParticipantResponse> =
                roster.into_iter().map(ParticipantResponse::from).collect();
            ApiResponse::success(response)
        }

        Err(ListParticipantsError::NotFound) => {
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }

        Err(ListParticipantsError::RepositoryError(ref e)) => {
            error!(error = %e, event_id = %event_id, "Database error listing participants");
            ApiResponse::internal_error()
        }
    }
}
