use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_admin_or_response, AuthenticatedUser,
};
use crate::event::adapter::incoming::web::routes::EventResponse;
use crate::event::application::domain::entities::EventCategory;
use crate::event::application::ports::outgoing::event_repository::CreateEventData;
use crate::event::application::use_cases::create_event::CreateEventError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct CreateEventDto {
    #[schema(example = "Summer open-air concert")]
    pub title: String,

    pub description: String,

    pub event_date: DateTime<Utc>,

    pub category: EventCategory,

    /// Image URLs previously obtained from the upload endpoint
    #[serde(default)]
    pub images: Vec<String>,
}

/// Create a published event directly (administrators only)
#[utoipa::path(
    post,
    path = "/events",
    tag = "events",
    security(("bearer_auth" = [])),
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created and published"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Administrator privileges required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/events")]
pub async fn create_event_handler(
    auth: AuthenticatedUser,
    req: web::Json<CreateEventDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let admin = match resolve_admin_or_response(&data, &auth).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let dto = req.into_inner();

    match data
        .create_event_use_case
        .execute(CreateEventData {
            title: dto.title,
            description: dto.description,
            event_date: dto.event_date,
            category: dto.category,
            images: dto.images,
            creator_id: admin.id,
        })
        .await
    {
        Ok(event) => {
            info!(event_id = %event.id, admin_id = %admin.id, "Event created by admin");
            ApiResponse::created(EventResponse::from(event))
        }

        Err(CreateEventError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error creating event");
            ApiResponse::internal_error()
        }
    }
}
