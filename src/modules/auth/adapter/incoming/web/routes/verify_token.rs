use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::AdminIdentity;
use actix_web::{get, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct VerifyTokenResponse {
    #[schema(example = true)]
    pub valid: bool,
    pub user: AdminIdentity,
}

/// Verify the caller's token
#[utoipa::path(
    get,
    path = "/api/admin/verify",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Token is valid", body = VerifyTokenResponse),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
    )
)]
#[get("/api/admin/verify")]
pub async fn verify_token_handler(user: AuthenticatedUser) -> impl Responder {
    HttpResponse::Ok().json(VerifyTokenResponse {
        valid: true,
        user: user.identity,
    })
}
