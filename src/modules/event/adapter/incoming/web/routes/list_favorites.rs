use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::event::adapter::incoming::web::routes::EventResponse;
use crate::event::application::use_cases::list_favorites::ListFavoritesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Events the caller has favorited
#[utoipa::path(
    get,
    path = "/events/favorites",
    tag = "events",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Favorited events"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/events/favorites")]
pub async fn list_favorites_handler(
    auth: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let user = match resolve_current_user_or_response(&data, &auth).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    match data.list_favorites_use_case.execute(user.id).await {
        Ok(events) => {
            let response: Vec<EventResponse> =
                events.into_iter().map(EventResponse::from).collect();
            ApiResponse::success(response)
        }

        Err(ListFavoritesError::RepositoryError(ref e)) => {
            error!(error = %e, user_id = %user.id, "Database error listing favorites");
            ApiResponse::internal_error()
        }
    }
}
