use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::comment::adapter::incoming::web::routes::CommentResponse;
use crate::comment::application::use_cases::list_event_comments::ListEventCommentsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Comments on an event, newest first (public)
#[utoipa::path(
    get,
    path = "/comments/event/{event_id}",
    tag = "comments",
    responses(
        (status = 200, description = "Comments ordered by created_at descending"),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/comments/event/{event_id}")]
pub async fn list_event_comments_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let event_id = path.into_inner();

    match data.list_event_comments_use_case.execute(event_id).await {
        Ok(comments) => {
            let response: Vec<CommentResponse> =
                comments.into_iter().map(CommentResponse::from).collect();
            ApiResponse::success(response)
        }

        Err(ListEventCommentsError::RepositoryError(ref e)) => {
            error!(error = %e, event_id = %event_id, "Database error listing comments");
            ApiResponse::internal_error()
        }
    }
}
