use actix_web::{put, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::profile::application::use_cases::upsert_profile::{ProfileUpdate, UpsertProfileError};
use crate::profile::domain::entities::ProfileView;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileEnvelope {
    pub data: ProfileView,
}

/// Update (or create) the owner profile
#[utoipa::path(
    put,
    path = "/api/admin/portfolio/profile",
    tag = "profile",
    security(("bearer_auth" = [])),
    request_body = ProfileUpdate,
    responses(
        (status = 200, description = "Saved profile", body = ProfileEnvelope),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
    )
)]
#[put("/api/admin/portfolio/profile")]
pub async fn upsert_profile_handler(
    _admin: AdminUser,
    body: web::Json<ProfileUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.upsert_profile_use_case.execute(body.into_inner()).await {
        Ok(profile) => ApiResponse::success(ProfileEnvelope { data: profile }),
        Err(UpsertProfileError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(UpsertProfileError::RepositoryError(e)) => {
            error!("Failed to save profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}
