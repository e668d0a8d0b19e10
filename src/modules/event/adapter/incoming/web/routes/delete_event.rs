use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::event::application::use_cases::delete_event::DeleteEventError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete an event (creator only); favorites, roster and comments go with it
#[utoipa::path(
    delete,
    path = "/events/{event_id}",
    tag = "events",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Acting user is not the creator", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/events/{event_id}")]
pub async fn delete_event_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user = match resolve_current_user_or_response(&data, &auth).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let event_id = path.into_inner();

    match data.delete_event_use_case.execute(event_id, user.id).await {
        Ok(()) => {
            info!(event_id = %event_id, user_id = %user.id, "Event deleted");
            ApiResponse::no_content()
        }

        Err(DeleteEventError::NotFound) => {
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }

        Err(DeleteEventError::Forbidden) => ApiResponse::forbidden(
            "NOT_EVENT_CREATOR",
            "Only the creator may delete this event",
        ),

        Err(DeleteEventError::RepositoryError(ref e)) => {
            error!(error = %e, event_id = %event_id, "Database error deleting event");
            ApiResponse::internal_error()
        }
    }
}
