use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::event::adapter::incoming::web::routes::EventResponse;
use crate::event::application::use_cases::events_by_creator::EventsByCreatorError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Events created by a given user (public)
#[utoipa::path(
    get,
    path = "/events/by-user/{user_id}",
    tag = "events",
    responses(
        (status = 200, description = "Events created by the user"),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/events/by-user/{user_id}")]
pub async fn events_by_user_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let creator_id = path.into_inner();

    match data.events_by_creator_use_case.execute(creator_id).await {
        Ok(events) => {
            let response: Vec<EventResponse> =
                events.into_iter().map(EventResponse::from).collect();
            ApiResponse::success(response)
        }

        Err(EventsByCreatorError::RepositoryError(ref e)) => {
            error!(error = %e, creator_id = %creator_id, "Database error listing user events");
            ApiResponse::internal_error()
        }
    }
}
