pub mod upload_avatar;
pub mod upload_event_image;

use actix_multipart::Multipart;
use actix_web::HttpResponse;
use futures::TryStreamExt;
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::api::ApiResponse;

pub use upload_avatar::upload_avatar_handler;
pub use upload_event_image::upload_event_image_handler;

/// 5 MB cap per uploaded image.
const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(Serialize, ToSchema)]
pub struct UploadedFileResponse {
    /// Public URL under which the file is served back
    #[schema(example = "/media/avatars/2b1c9a28-....png")]
    pub url: String,
}

/// Pulls the `file` part out of a multipart body: original filename plus
/// the raw bytes, capped at [`MAX_UPLOAD_BYTES`].
pub(crate) async fn read_image_upload(
    mut payload: Multipart,
) -> Result<(String, Vec<u8>), HttpResponse> {
    while let Some(mut field) = payload.try_next().await.map_err(|_| {
        ApiResponse::bad_request("VALIDATION_ERROR", "Malformed multipart payload")
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string)
            .ok_or_else(|| {
                ApiResponse::bad_request("VALIDATION_ERROR", "Missing file name")
            })?;

        let mut bytes: Vec<u8> = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(|_| {
            ApiResponse::bad_request("VALIDATION_ERROR", "Malformed multipart payload")
        })? {
            if bytes.len() + chunk.len() > MAX_UPLOAD_BYTES {
                return Err(ApiResponse::bad_request(
                    "FILE_TOO_LARGE",
                    "Uploaded file exceeds the size limit",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        return Ok((filename, bytes));
    }

    Err(ApiResponse::bad_request(
        "VALIDATION_ERROR",
        "Multipart field 'file' is required",
    ))
}
