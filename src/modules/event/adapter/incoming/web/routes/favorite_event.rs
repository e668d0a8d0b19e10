use actix_web::{post, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::event::adapter::incoming::web::routes::StatusResponse;
use crate::event::application::use_cases::favorite_event::FavoriteEventError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Add an event to the caller's favorites
#[utoipa::path(
    post,
    path = "/events/{event_id}/favorite",
    tag = "events",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Added to favorites"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 409, description = "Already favorited", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/events/{event_id}/favorite")]
pub async fn favorite_event_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user = match resolve_current_user_or_response(&data, &auth).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let event_id = path.into_inner();

    match data.favorite_event_use_case.execute(event_id, user.id).await {
        Ok(()) => ApiResponse::success(StatusResponse { status: "added" }),

        Err(FavoriteEventError::NotFound) => {
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }

        Err(FavoriteEventError::AlreadyFavorited) => {
            ApiResponse::conflict("ALREADY_FAVORITED", "Event already in favorites")
        }

        Err(FavoriteEventError::RepositoryError(ref e)) => {
            error!(error = %e, event_id = %event_id, "Database error adding favorite");
            ApiResponse::internal_error()
        }
    }
}
