use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::media::adapter::incoming::web::multipart::{media_error_response, read_multipart_form};
use crate::profile::application::use_cases::update_profile_image::UpdateProfileImageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileImageResponse {
    #[schema(example = "/uploads/me-1718000000000-12345.png")]
    pub image_url: String,
}

/// Replace the profile picture
#[utoipa::path(
    post,
    path = "/api/admin/portfolio/profile/image",
    tag = "profile",
    security(("bearer_auth" = [])),
    request_body(content_type = "multipart/form-data", description = "Field `image`"),
    responses(
        (status = 200, description = "Image stored", body = ProfileImageResponse),
        (status = 400, description = "No file or rejected type", body = ErrorResponse),
        (status = 413, description = "Image over 5MB", body = ErrorResponse),
    )
)]
#[post("/api/admin/portfolio/profile/image")]
pub async fn upload_profile_image_handler(
    _admin: AdminUser,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut form =
        match read_multipart_form(payload, "image", data.upload_policy.max_file_size_bytes).await {
            Ok(form) => form,
            Err(e) => return e.to_response(),
        };

    let Some(file) = form.take_file() else {
        return ApiResponse::bad_request("NO_FILE", "No image file provided");
    };

    match data.update_profile_image_use_case.execute(file).await {
        Ok(image_url) => ApiResponse::success(ProfileImageResponse { image_url }),
        Err(UpdateProfileImageError::Media(e)) => media_error_response(&e),
        Err(UpdateProfileImageError::RepositoryError(e)) => {
            error!("Failed to persist profile image: {}", e);
            ApiResponse::internal_error()
        }
    }
}
