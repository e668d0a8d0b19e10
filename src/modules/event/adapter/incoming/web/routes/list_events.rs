use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::event::adapter::incoming::web::routes::{EventListItemResponse, EventResponse};
use crate::event::application::domain::entities::EventCategory;
use crate::event::application::ports::outgoing::event_repository::{
    EventListQuery, EventSortField, SortDirection,
};
use crate::event::application::use_cases::list_events::ListEventsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

const MAX_LIMIT: u64 = 100;

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortByDto {
    EventDate,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderDto {
    Asc,
    Desc,
}

fn default_limit() -> u64 {
    10
}

#[derive(Deserialize, ToSchema)]
pub struct ListEventsQueryDto {
    #[serde(default)]
    pub skip: u64,

    /// Page size, 1..=100
    #[serde(default = "default_limit")]
    pub limit: u64,

    pub sort_by: Option<SortByDto>,

    pub order: Option<OrderDto>,

    pub category: Option<EventCategory>,

    pub is_approved: Option<bool>,
}

/// Browse published events
#[utoipa::path(
    get,
    path = "/events",
    tag = "events",
    responses(
        (status = 200, description = "Events in the requested order, each with its roster size"),
        (status = 400, description = "Limit out of range", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/events")]
pub async fn list_events_handler(
    query: web::Query<ListEventsQueryDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = query.into_inner();

    if dto.limit == 0 || dto.limit > MAX_LIMIT {
        return ApiResponse::bad_request(
            "VALIDATION_ERROR",
            &format!("limit must be between 1 and {}", MAX_LIMIT),
        );
    }

    let query = EventListQuery {
        category: dto.category,
        is_approved: dto.is_approved,
        sort_by: match dto.sort_by.unwrap_or(SortByDto::EventDate) {
            SortByDto::EventDate => EventSortField::EventDate,
            SortByDto::CreatedAt => EventSortField::CreatedAt,
        },
        order: match dto.order.unwrap_or(OrderDto::Asc) {
            OrderDto::Asc => SortDirection::Asc,
            OrderDto::Desc => SortDirection::Desc,
        },
        skip: dto.skip,
        limit: dto.limit,
    };

    match data.list_events_use_case.execute(query).await {
        Ok(items) => {
            let response: Vec<EventListItemResponse> = items
                .into_iter()
                .map(|item| EventListItemResponse {
                    event: EventResponse::from(item.event),
                    participants_count: item.participants_count,
                })
                .collect();

            ApiResponse::success(response)
        }

        Err(ListEventsError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error listing events");
            ApiResponse::internal_error()
        }
    }
}
