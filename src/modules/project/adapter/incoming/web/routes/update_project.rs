use actix_multipart::Multipart;
use actix_web::{put, web, Responder};
use tracing::error;

use super::create_project::ProjectEnvelope;
use super::project_form::{parse_project_id, project_form_from, IMAGE_FIELD};
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::media::adapter::incoming::web::multipart::{media_error_response, read_multipart_form};
use crate::project::application::ports::incoming::use_cases::UpdateProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Update a project
///
/// Only submitted fields change. A new `image` replaces the stored one.
#[utoipa::path(
    put,
    path = "/api/admin/portfolio/projects/{id}",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Project id")),
    request_body(content_type = "multipart/form-data", description = "Changed fields plus optional image"),
    responses(
        (status = 200, description = "Project updated", body = ProjectEnvelope),
        (status = 400, description = "Invalid field or rejected file", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 413, description = "Image over 5MB", body = ErrorResponse),
    )
)]
#[put("/api/admin/portfolio/projects/{id}")]
pub async fn update_project_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(project_id) = parse_project_id(&path.into_inner()) else {
        return ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found");
    };

    let mut form =
        match read_multipart_form(payload, IMAGE_FIELD, data.upload_policy.max_file_size_bytes)
            .await
        {
            Ok(form) => form,
            Err(e) => return e.to_response(),
        };

    let image = form.take_file();
    let input = project_form_from(&mut form);

    match data.project.update.execute(project_id, input, image).await {
        Ok(project) => ApiResponse::success(ProjectEnvelope { project }),

        Err(UpdateProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(UpdateProjectError::Validation(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),

        Err(UpdateProjectError::Media(e)) => media_error_response(&e),

        Err(UpdateProjectError::RepositoryError(e)) => {
            error!(project_id = %project_id, "Repository error updating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
