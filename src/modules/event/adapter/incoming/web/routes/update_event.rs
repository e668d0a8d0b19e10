use actix_web::{put, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::event::adapter::incoming::web::routes::EventResponse;
use crate::event::application::domain::entities::EventCategory;
use crate::event::application::ports::outgoing::event_repository::{EventPatch, PatchField};
use crate::event::application::use_cases::update_event::UpdateEventError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Partial update: omitted fields stay untouched, `"images": null` clears
/// the image list, null on any other field is a validation error.
#[derive(Deserialize, ToSchema)]
pub struct UpdateEventDto {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub title: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub event_date: PatchField<DateTime<Utc>>,

    #[serde(default)]
    #[schema(value_type = Option<EventCategory>)]
    pub category: PatchField<EventCategory>,

    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub images: PatchField<Vec<String>>,
}

/// Edit an event (creator only)
#[utoipa::path(
    put,
    path = "/events/{event_id}",
    tag = "events",
    security(("bearer_auth" = [])),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Updated event"),
        (status = 400, description = "Null on a non-clearable field", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Acting user is not the creator", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/events/{event_id}")]
pub async fn update_event_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateEventDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user = match resolve_current_user_or_response(&data, &auth).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let event_id = path.into_inner();
    let dto = req.into_inner();

    let patch = EventPatch {
        title: dto.title,
        description: dto.description,
        event_date: dto.event_date,
        category: dto.category,
        images: dto.images,
    };

    match data
        .update_event_use_case
        .execute(event_id, user.id, patch)
        .await
    {
        Ok(event) => ApiResponse::success(EventResponse::from(event)),

        Err(UpdateEventError::NotFound) => {
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }

        Err(UpdateEventError::Forbidden) => ApiResponse::forbidden(
            "NOT_EVENT_CREATOR",
            "Only the creator may edit this event",
        ),

        Err(UpdateEventError::FieldNotNullable(field)) => ApiResponse::bad_request(
            "VALIDATION_ERROR",
            &format!("Field cannot be cleared: {}", field),
        ),

        Err(UpdateEventError::RepositoryError(ref e)) => {
            error!(error = %e, event_id = %event_id, "Database error updating event");
            ApiResponse::internal_error()
        }
    }
}
