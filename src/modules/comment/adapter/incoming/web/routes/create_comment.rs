use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::comment::adapter::incoming::web::routes::CommentResponse;
use crate::comment::application::use_cases::create_comment::CreateCommentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct CreateCommentDto {
    #[schema(example = "See you there!")]
    pub text: String,

    pub event_id: Uuid,
}

/// Comment on an event
#[utoipa::path(
    post,
    path = "/comments",
    tag = "comments",
    security(("bearer_auth" = [])),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created"),
        (status = 400, description = "Empty comment text", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/comments")]
pub async fn create_comment_handler(
    auth: AuthenticatedUser,
    req: web::Json<CreateCommentDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user = match resolve_current_user_or_response(&data, &auth).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let dto = req.into_inner();

    match data
        .create_comment_use_case
        .execute(dto.event_id, dto.text, user.id)
        .await
    {
        Ok(comment) => ApiResponse::created(CommentResponse::from(comment)),

        Err(CreateCommentError::EventNotFound) => {
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }

        Err(CreateCommentError::EmptyText) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Comment text cannot be empty")
        }

        Err(CreateCommentError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error creating comment");
            ApiResponse::internal_error()
        }
    }
}
