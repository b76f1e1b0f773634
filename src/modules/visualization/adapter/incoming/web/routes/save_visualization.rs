use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::media::adapter::incoming::web::multipart::{media_error_response, read_multipart_form};
use crate::shared::api::ApiResponse;
use crate::visualization::application::domain::entities::VisualizationView;
use crate::visualization::application::ports::incoming::use_cases::{
    SaveVisualizationError, VisualizationForm,
};
use crate::AppState;

const IMAGE_FIELD: &str = "image";
const SAVED_MESSAGE: &str = "Visualization saved successfully";

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveVisualizationResponse {
    pub image_url: String,
    pub message: String,
    pub visualization: VisualizationView,
}

/// Save a rendered chart image
///
/// Multipart form: `image`, `visualizationId`, `reportType`. Saving again
/// under the same pair replaces the stored image.
#[utoipa::path(
    post,
    path = "/api/admin/visualization/save",
    tag = "visualizations",
    security(("bearer_auth" = [])),
    request_body(content_type = "multipart/form-data", description = "Chart image plus its key"),
    responses(
        (status = 200, description = "Saved", body = SaveVisualizationResponse),
        (status = 400, description = "Missing file or key, or rejected file", body = ErrorResponse),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 413, description = "Image over 5MB", body = ErrorResponse),
    )
)]
#[post("/api/admin/visualization/save")]
pub async fn save_visualization_handler(
    _admin: AdminUser,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut form =
        match read_multipart_form(payload, IMAGE_FIELD, data.upload_policy.max_file_size_bytes)
            .await
        {
            Ok(form) => form,
            Err(e) => return e.to_response(),
        };

    let image = form.take_file();
    let input = VisualizationForm {
        visualization_id: form.take_text("visualizationId"),
        report_type: form.take_text("reportType"),
    };

    match data.visualization.save.execute(input, image).await {
        Ok(saved) => ApiResponse::success(SaveVisualizationResponse {
            image_url: saved.image_url.clone(),
            message: SAVED_MESSAGE.to_string(),
            visualization: saved.into(),
        }),
        Err(e @ SaveVisualizationError::MissingFile) => {
            ApiResponse::bad_request("NO_FILE", &e.to_string())
        }
        Err(e @ SaveVisualizationError::MissingKey) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(SaveVisualizationError::Media(e)) => media_error_response(&e),
        Err(SaveVisualizationError::RepositoryError(e)) => {
            error!("Repository error saving visualization: {}", e);
            ApiResponse::internal_error()
        }
    }
}
