use actix_web::{delete, web, Responder};
use tracing::error;

use super::project_form::parse_project_id;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::project::application::ports::incoming::use_cases::DeleteProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a project
#[utoipa::path(
    delete,
    path = "/api/admin/portfolio/projects/{id}",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project deleted", body = SuccessResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
    )
)]
#[delete("/api/admin/portfolio/projects/{id}")]
pub async fn delete_project_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(project_id) = parse_project_id(&path.into_inner()) else {
        return ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found");
    };

    match data.project.delete.execute(project_id).await {
        Ok(()) => ApiResponse::ok(),

        Err(DeleteProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(DeleteProjectError::RepositoryError(e)) => {
            error!(project_id = %project_id, "Repository error deleting project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
