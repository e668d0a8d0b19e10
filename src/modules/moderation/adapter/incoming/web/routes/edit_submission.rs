use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::moderation::adapter::incoming::web::routes::{
    ReviewEventResponse, SubmissionFieldsDto,
};
use crate::moderation::application::use_cases::edit_submission::EditSubmissionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Edit a pending submission (submitter only); full field replacement
#[utoipa::path(
    put,
    path = "/event-on-review/edit/{submission_id}",
    tag = "moderation",
    security(("bearer_auth" = [])),
    request_body = SubmissionFieldsDto,
    responses(
        (status = 200, description = "Updated submission"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Acting user is not the submitter", body = ErrorResponse),
        (status = 404, description = "No pending submission with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/event-on-review/edit/{submission_id}")]
pub async fn edit_submission_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<SubmissionFieldsDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user = match resolve_current_user_or_response(&data, &auth).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let submission_id = path.into_inner();

    match data
        .edit_submission_use_case
        .execute(submission_id, user.id, req.into_inner().into())
        .await
    {
        Ok(submission) => ApiResponse::success(ReviewEventResponse::from(submission)),

        Err(EditSubmissionError::NotFound) => {
            ApiResponse::not_found("SUBMISSION_NOT_FOUND", "Submission not found")
        }

        Err(EditSubmissionError::Forbidden) => ApiResponse::forbidden(
            "NOT_SUBMITTER",
            "Only the submitter may edit this submission",
        ),

        Err(EditSubmissionError::RepositoryError(ref e)) => {
            error!(error = %e, submission_id = %submission_id, "Database error editing submission");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use async_trait::async_trait;

    use crate::moderation::application::domain::entities::ReviewEvent;
    use crate::moderation::application::ports::outgoing::review_repository::SubmissionFields;
    use crate::moderation::application::use_cases::edit_submission::IEditSubmissionUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::TestIdentity;

    struct MockEditForbidden;

    #[async_trait]
    impl IEditSubmissionUseCase for MockEditForbidden {
        async fn execute(
            &self,
            _submission_id: Uuid,
            _actor_id: Uuid,
            _fields: SubmissionFields,
        ) -> Result<ReviewEvent, EditSubmissionError> {
            Err(EditSubmissionError::Forbidden)
        }
    }

    #[actix_web::test]
    async fn non_submitter_gets_403() {
        let identity = TestIdentity::user();
        let state = TestAppStateBuilder::default()
            .with_current_user(identity.user.clone())
            .with_edit_submission(MockEditForbidden)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(identity.token_provider.clone()))
                .service(edit_submission_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/event-on-review/edit/{}", Uuid::new_v4()))
            .insert_header(("Authorization", format!("Bearer {}", identity.token)))
            .set_json(serde_json::json!({
                "title": "Renamed",
                "description": "d",
                "event_date": "2026-09-12T12:00:00Z",
                "category": "other"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "NOT_SUBMITTER");
    }
}
