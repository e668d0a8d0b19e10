use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::comment::application::use_cases::delete_comment::DeleteCommentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a comment (author only; anyone else sees 404, not 403)
#[utoipa::path(
    delete,
    path = "/comments/{comment_id}",
    tag = "comments",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Comment not found or owned by someone else", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/comments/{comment_id}")]
pub async fn delete_comment_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user = match resolve_current_user_or_response(&data, &auth).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let comment_id = path.into_inner();

    match data
        .delete_comment_use_case
        .execute(comment_id, user.id)
        .await
    {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteCommentError::NotFound) => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment not found")
        }

        Err(DeleteCommentError::RepositoryError(ref e)) => {
            error!(error = %e, comment_id = %comment_id, "Database error deleting comment");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use async_trait::async_trait;

    use crate::comment::application::use_cases::delete_comment::IDeleteCommentUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::TestIdentity;

    struct MockDeleteNotFound;

    #[async_trait]
    impl IDeleteCommentUseCase for MockDeleteNotFound {
        async fn execute(
            &self,
            _comment_id: Uuid,
            _actor_id: Uuid,
        ) -> Result<(), DeleteCommentError> {
            Err(DeleteCommentError::NotFound)
        }
    }

    #[actix_web::test]
    async fn foreign_comment_delete_reads_as_404() {
        let identity = TestIdentity::user();
        let state = TestAppStateBuilder::default()
            .with_current_user(identity.user.clone())
            .with_delete_comment(MockDeleteNotFound)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(identity.token_provider.clone()))
                .service(delete_comment_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/comments/{}", Uuid::new_v4()))
            .insert_header(("Authorization", format!("Bearer {}", identity.token)))
            .to_request();

        let resp = test::call_service(&app, req).await;

        // Information hiding: never a 403 for someone else's comment.
        assert_eq!(resp.status(), 404);
    }
}
