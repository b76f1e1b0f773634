use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::project::application::domain::entities::ProjectRecord;
use crate::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List every project (admin)
#[utoipa::path(
    get,
    path = "/api/admin/portfolio/projects",
    tag = "projects",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Projects in display order", body = [ProjectRecord]),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
    )
)]
#[get("/api/admin/portfolio/projects")]
pub async fn get_projects_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.project.get_list.execute().await {
        Ok(projects) => ApiResponse::raw(projects),
        Err(GetProjectsError::RepositoryError(e)) => {
            error!("Repository error listing projects: {}", e);
            ApiResponse::internal_error()
        }
    }
}
