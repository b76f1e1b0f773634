use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::skill::application::use_cases::replace_skills::ReplaceSkillsError;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ReplaceSkillsRequest {
    #[schema(example = json!(["Rust", "PostgreSQL", "Docker"]))]
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SkillsResponse {
    pub skills: Vec<String>,
}

/// Replace the whole skill list
#[utoipa::path(
    put,
    path = "/api/admin/portfolio/skills",
    tag = "skills",
    security(("bearer_auth" = [])),
    request_body = ReplaceSkillsRequest,
    responses(
        (status = 200, description = "Stored skills in display order", body = SkillsResponse),
        (status = 400, description = "Blank or duplicate names", body = ErrorResponse),
    )
)]
#[put("/api/admin/portfolio/skills")]
pub async fn replace_skills_handler(
    _admin: AdminUser,
    body: web::Json<ReplaceSkillsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .replace_skills_use_case
        .execute(body.into_inner().skills)
        .await
    {
        Ok(skills) => ApiResponse::success(SkillsResponse { skills }),
        Err(ReplaceSkillsError::Invalid(e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(ReplaceSkillsError::RepositoryError(e)) => {
            error!("Failed to replace skills: {}", e);
            ApiResponse::internal_error()
        }
    }
}
