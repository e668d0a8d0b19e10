use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::shared::api::ApiResponse;
use crate::upload::adapter::incoming::web::routes::{read_image_upload, UploadedFileResponse};
use crate::upload::application::use_cases::store_event_image::StoreEventImageError;
use crate::AppState;

/// Upload an event image; returns a URL to attach to a submission
#[utoipa::path(
    post,
    path = "/upload/event_image",
    tag = "upload",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Stored; URL returned"),
        (status = 400, description = "Bad multipart body or disallowed file type", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/upload/event_image")]
pub async fn upload_event_image_handler(
    auth: AuthenticatedUser,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let user = match resolve_current_user_or_response(&data, &auth).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let (filename, bytes) = match read_image_upload(payload).await {
        Ok(upload) => upload,
        Err(response) => return response,
    };

    match data
        .store_event_image_use_case
        .execute(&filename, bytes)
        .await
    {
        Ok(url) => {
            info!(user_id = %user.id, url = %url, "Event image uploaded");
            ApiResponse::success(UploadedFileResponse { url })
        }

        Err(StoreEventImageError::InvalidExtension) => {
            ApiResponse::bad_request("INVALID_FILE_TYPE", "File type is not allowed")
        }

        Err(StoreEventImageError::StorageError(ref e)) => {
            error!(error = %e, "Storage error saving event image");
            ApiResponse::internal_error()
        }
    }
}
