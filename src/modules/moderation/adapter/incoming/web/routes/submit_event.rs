use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::moderation::adapter::incoming::web::routes::{
    ReviewEventResponse, SubmissionFieldsDto,
};
use crate::moderation::application::use_cases::submit_event::SubmitEventError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Submit an event for review (any authenticated user)
#[utoipa::path(
    post,
    path = "/event-on-review/create",
    tag = "moderation",
    security(("bearer_auth" = [])),
    request_body = SubmissionFieldsDto,
    responses(
        (status = 201, description = "Submission queued for review"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/event-on-review/create")]
pub async fn submit_event_handler(
    auth: AuthenticatedUser,
    req: web::Json<SubmissionFieldsDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user = match resolve_current_user_or_response(&data, &auth).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    match data
        .submit_event_use_case
        .execute(req.into_inner().into(), user.id)
        .await
    {
        Ok(submission) => {
            info!(
                submission_id = %submission.id,
                user_id = %user.id,
                "Event submitted for review"
            );
            ApiResponse::created(ReviewEventResponse::from(submission))
        }

        Err(SubmitEventError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error submitting event");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::moderation::application::domain::entities::ReviewEvent;
    use crate::moderation::application::ports::outgoing::review_repository::SubmissionFields;
    use crate::moderation::application::use_cases::submit_event::ISubmitEventUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::TestIdentity;

    struct MockSubmit;

    #[async_trait]
    impl ISubmitEventUseCase for MockSubmit {
        async fn execute(
            &self,
            fields: SubmissionFields,
            actor_id: Uuid,
        ) -> Result<ReviewEvent, SubmitEventError> {
            Ok(ReviewEvent {
                id: Uuid::new_v4(),
                title: fields.title,
                description: fields.description,
                event_date: fields.event_date,
                category: fields.category,
                creator_id: actor_id,
                created_at: Utc::now(),
            })
        }
    }

    #[actix_web::test]
    async fn submission_does_not_require_admin() {
        let identity = TestIdentity::user();
        let state = TestAppStateBuilder::default()
            .with_current_user(identity.user.clone())
            .with_submit_event(MockSubmit)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(identity.token_provider.clone()))
                .service(submit_event_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/event-on-review/create")
            .insert_header(("Authorization", format!("Bearer {}", identity.token)))
            .set_json(serde_json::json!({
                "title": "Street food festival",
                "description": "Weekend market",
                "event_date": "2026-09-12T12:00:00Z",
                "category": "other"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["creator_id"], identity.user.id.to_string());
    }

    #[actix_web::test]
    async fn unknown_category_is_a_validation_error() {
        let identity = TestIdentity::user();
        let state = TestAppStateBuilder::default()
            .with_current_user(identity.user.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(identity.token_provider.clone()))
                .service(submit_event_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/event-on-review/create")
            .insert_header(("Authorization", format!("Bearer {}", identity.token)))
            .set_json(serde_json::json!({
                "title": "Street food festival",
                "description": "Weekend market",
                "event_date": "2026-09-12T12:00:00Z",
                "category": "opera"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }
}
