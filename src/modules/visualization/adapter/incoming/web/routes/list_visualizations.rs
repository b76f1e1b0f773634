use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::visualization::application::domain::entities::VisualizationView;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationQuery {
    /// Report type to keep; `all` or absent keeps every type.
    pub report_type: Option<String>,
}

async fn list(data: &AppState, query: VisualizationQuery) -> actix_web::HttpResponse {
    match data.visualization.list.execute(query.report_type).await {
        Ok(views) => ApiResponse::raw(views),
        Err(e) => {
            error!("Failed to list visualizations: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Latest image per visualization
#[utoipa::path(
    get,
    path = "/api/visualizations",
    tag = "public",
    params(VisualizationQuery),
    responses(
        (status = 200, description = "One entry per visualization id, newest first", body = [VisualizationView]),
        (status = 500, description = "Database failure", body = ErrorResponse),
    )
)]
#[get("/api/visualizations")]
pub async fn list_visualizations_handler(
    query: web::Query<VisualizationQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    list(&data, query.into_inner()).await
}

/// Same listing for the analytics dashboard
#[utoipa::path(
    get,
    path = "/api/admin/analytics/visualizations",
    tag = "visualizations",
    security(("bearer_auth" = [])),
    params(VisualizationQuery),
    responses(
        (status = 200, description = "One entry per visualization id, newest first", body = [VisualizationView]),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
    )
)]
#[get("/api/admin/analytics/visualizations")]
pub async fn list_admin_visualizations_handler(
    _admin: AdminUser,
    query: web::Query<VisualizationQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    list(&data, query.into_inner()).await
}
