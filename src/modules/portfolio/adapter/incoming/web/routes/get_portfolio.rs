use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::portfolio::domain::entities::PortfolioView;
use crate::shared::api::ApiResponse;
use crate::AppState;

async fn render(data: &AppState) -> HttpResponse {
    match data.get_portfolio_use_case.execute().await {
        Ok(view) => ApiResponse::raw(view),
        Err(e) => {
            error!("Failed to load portfolio: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Profile, projects and skill names for the public site
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "public",
    responses(
        (status = 200, description = "Portfolio aggregate", body = PortfolioView),
        (status = 500, description = "Database failure", body = ErrorResponse),
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    render(&data).await
}

/// Portfolio aggregate for the admin dashboard
#[utoipa::path(
    get,
    path = "/api/admin/portfolio",
    tag = "portfolio",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Portfolio aggregate", body = PortfolioView),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
    )
)]
#[get("/api/admin/portfolio")]
pub async fn get_admin_portfolio_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    render(&data).await
}
