use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};

// Auth
use crate::auth::adapter::incoming::web::routes::{
    LoginFormDto, RegisterRequestDto, RegisteredUserResponse, TokenResponse, UserProfileResponse,
};
// Events
use crate::event::adapter::incoming::web::routes::{
    CreateEventDto, EventDetailsResponse, EventListItemResponse, EventResponse,
    ParticipantResponse, StatusResponse, UpdateEventDto,
};
// Moderation
use crate::moderation::adapter::incoming::web::routes::{
    ModerationStatusResponse, ReviewEventResponse, SubmissionFieldsDto,
};
// Comments
use crate::comment::adapter::incoming::web::routes::{CommentResponse, CreateCommentDto};
// Admin
use crate::admin::adapter::incoming::web::routes::AdminTargetResponse;
// Upload
use crate::upload::adapter::incoming::web::routes::UploadedFileResponse;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EventHub API",
        version = "1.0.0",
        description = "Event listing backend: registration, events, attendance, favorites, comments and a moderation queue"
    ),
    modifiers(&BearerAuth),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::register_user::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user::login_user_handler,
        crate::auth::adapter::incoming::web::routes::get_me::get_me_handler,

        // Events
        crate::event::adapter::incoming::web::routes::create_event::create_event_handler,
        crate::event::adapter::incoming::web::routes::list_events::list_events_handler,
        crate::event::adapter::incoming::web::routes::get_event::get_event_handler,
        crate::event::adapter::incoming::web::routes::update_event::update_event_handler,
        crate::event::adapter::incoming::web::routes::delete_event::delete_event_handler,
        crate::event::adapter::incoming::web::routes::events_by_user::events_by_user_handler,
        crate::event::adapter::incoming::web::routes::attend_event::attend_event_handler,
        crate::event::adapter::incoming::web::routes::cancel_attendance::cancel_attendance_handler,
        crate::event::adapter::incoming::web::routes::list_participants::list_participants_handler,
        crate::event::adapter::incoming::web::routes::favorite_event::favorite_event_handler,
        crate::event::adapter::incoming::web::routes::unfavorite_event::unfavorite_event_handler,
        crate::event::adapter::incoming::web::routes::list_favorites::list_favorites_handler,

        // Moderation
        crate::moderation::adapter::incoming::web::routes::submit_event::submit_event_handler,
        crate::moderation::adapter::incoming::web::routes::list_pending::list_pending_handler,
        crate::moderation::adapter::incoming::web::routes::approve_event::approve_event_handler,
        crate::moderation::adapter::incoming::web::routes::reject_event::reject_event_handler,
        crate::moderation::adapter::incoming::web::routes::edit_submission::edit_submission_handler,

        // Comments
        crate::comment::adapter::incoming::web::routes::create_comment::create_comment_handler,
        crate::comment::adapter::incoming::web::routes::list_event_comments::list_event_comments_handler,
        crate::comment::adapter::incoming::web::routes::delete_comment::delete_comment_handler,

        // Admin
        crate::admin::adapter::incoming::web::routes::assign_admin::assign_admin_handler,
        crate::admin::adapter::incoming::web::routes::revoke_admin::revoke_admin_handler,

        // Upload
        crate::upload::adapter::incoming::web::routes::upload_avatar::upload_avatar_handler,
        crate::upload::adapter::incoming::web::routes::upload_event_image::upload_event_image_handler,
    ),
    components(
        schemas(
            SuccessResponse<TokenResponse>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            RegisterRequestDto,
            RegisteredUserResponse,
            LoginFormDto,
            TokenResponse,
            UserProfileResponse,

            // Event DTOs
            CreateEventDto,
            UpdateEventDto,
            EventResponse,
            EventListItemResponse,
            EventDetailsResponse,
            ParticipantResponse,
            StatusResponse,

            // Moderation DTOs
            SubmissionFieldsDto,
            ReviewEventResponse,
            ModerationStatusResponse,

            // Comment DTOs
            CreateCommentDto,
            CommentResponse,

            // Admin DTOs
            AdminTargetResponse,

            // Upload DTOs
            UploadedFileResponse,
        )
    ),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "events", description = "Published events, attendance and favorites"),
        (name = "moderation", description = "Review queue for submitted events"),
        (name = "comments", description = "Event comments"),
        (name = "admin", description = "Administrator role management"),
        (name = "upload", description = "Image uploads"),
    )
)]
pub struct ApiDoc;
