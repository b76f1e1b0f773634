use actix_web::{get, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::AppConfig;

#[derive(Serialize, ToSchema)]
pub struct TestResponse {
    message: &'static str,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FrontendStatus {
    path: String,
    exists: bool,
    index_exists: bool,
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: &'static str,
    timestamp: DateTime<Utc>,
    frontend: FrontendStatus,
    environment: &'static str,
}

/// Smoke test
#[utoipa::path(
    get,
    path = "/api/test",
    tag = "health",
    responses((status = 200, description = "Backend is up", body = TestResponse))
)]
#[get("/api/test")]
pub async fn smoke_test() -> impl Responder {
    HttpResponse::Ok().json(TestResponse {
        message: "Backend is working correctly",
    })
}

/// Liveness plus frontend build presence. No database I/O.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses((status = 200, description = "Process status", body = HealthResponse))
)]
#[get("/api/health")]
pub async fn health(config: web::Data<AppConfig>) -> impl Responder {
    let frontend_dir = &config.frontend_dir;

    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
        frontend: FrontendStatus {
            path: frontend_dir.display().to_string(),
            exists: frontend_dir.is_dir(),
            index_exists: frontend_dir.join("index.html").is_file(),
        },
        environment: config.env.as_str(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::test_app_config;
    use actix_web::{test, App};
    use serde_json::Value;
    use tempfile::TempDir;

    #[actix_web::test]
    async fn test_smoke_test_message() {
        let app = test::init_service(App::new().service(smoke_test)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/test").to_request()).await;
        let body: Value = test::read_body_json(resp).await;

        assert_eq!(body["message"], "Backend is working correctly");
    }

    #[actix_web::test]
    async fn test_health_reports_frontend_build() {
        let frontend = TempDir::new().unwrap();
        std::fs::write(frontend.path().join("index.html"), "<html></html>").unwrap();
        let mut config = test_app_config();
        config.frontend_dir = frontend.path().to_path_buf();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config))
                .service(health),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request()).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["frontend"]["exists"], true);
        assert_eq!(body["frontend"]["indexExists"], true);
        assert_eq!(body["environment"], "test");
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn test_health_without_frontend_build() {
        let mut config = test_app_config();
        config.frontend_dir = "/nonexistent/frontend/out".into();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config))
                .service(health),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request()).await;
        let body: Value = test::read_body_json(resp).await;

        assert_eq!(body["frontend"]["exists"], false);
        assert_eq!(body["frontend"]["indexExists"], false);
    }
}
