use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use super::project_form::{project_form_from, IMAGE_FIELD};
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::media::adapter::incoming::web::multipart::{media_error_response, read_multipart_form};
use crate::project::application::domain::entities::ProjectRecord;
use crate::project::application::ports::incoming::use_cases::CreateProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectEnvelope {
    pub project: ProjectRecord,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Create a project
///
/// Multipart form: `title`, `description` (required), `technologies`
/// (comma separated), `github`, `demo`, `featured` and an optional `image`.
#[utoipa::path(
    post,
    path = "/api/admin/portfolio/projects",
    tag = "projects",
    security(("bearer_auth" = [])),
    request_body(content_type = "multipart/form-data", description = "Project fields plus optional image"),
    responses(
        (status = 200, description = "Project created", body = ProjectEnvelope),
        (status = 400, description = "Missing fields or rejected file", body = ErrorResponse),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 413, description = "Image over 5MB", body = ErrorResponse),
    )
)]
#[post("/api/admin/portfolio/projects")]
pub async fn create_project_handler(
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
    let input = project_form_from(&mut form);

    match data.project.create.execute(input, image).await {
        Ok(project) => ApiResponse::success(ProjectEnvelope { project }),

        Err(CreateProjectError::Validation(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),

        Err(CreateProjectError::Media(e)) => media_error_response(&e),

        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Repository error creating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
