use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::event::adapter::incoming::web::routes::{EventDetailsResponse, EventResponse};
use crate::event::application::use_cases::get_event::GetEventError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fetch a single event annotated for the viewer
#[utoipa::path(
    get,
    path = "/events/{event_id}",
    tag = "events",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Event with joined/participants_count/is_favorite"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/events/{event_id}")]
pub async fn get_event_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let viewer = match resolve_current_user_or_response(&data, &auth).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let event_id = path.into_inner();

    match data.get_event_use_case.execute(event_id, viewer.id).await {
        Ok(details) => ApiResponse::success(EventDetailsResponse {
            event: EventResponse::from(details.event),
            joined: details.joined,
            participants_count: details.participants_count,
            is_favorite: details.is_favorite,
        }),

        Err(GetEventError::NotFound) => {
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }

        Err(GetEventError::RepositoryError(ref e)) => {
            error!(error = %e, event_id = %event_id, "Database error fetching event");
            ApiResponse::internal_error()
        }
    }
}
