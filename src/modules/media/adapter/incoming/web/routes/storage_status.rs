use crate::media::application::domain::entities::StorageStatus;
use crate::AppState;
use actix_web::{get, web, HttpResponse, Responder};

/// Which storage backend is active
#[utoipa::path(
    get,
    path = "/api/storage/status",
    tag = "media",
    responses(
        (status = 200, description = "Active storage backend", body = StorageStatus,
            example = json!({ "storage": "cloudinary", "cloud_name": "my-cloud" })),
    )
)]
#[get("/api/storage/status")]
pub async fn storage_status_handler(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(&data.storage_status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::application::domain::entities::StorageKind;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_reports_local_backend_by_default() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(app_state).service(storage_status_handler)).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/storage/status").to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["storage"], "local");
        assert!(body["cloud_name"].is_null());
    }

    #[actix_web::test]
    async fn test_reports_remote_backend_with_cloud_name() {
        let app_state = TestAppStateBuilder::default()
            .with_storage_status(StorageStatus {
                storage: StorageKind::Remote,
                cloud_name: Some("demo".to_string()),
            })
            .build();
        let app = test::init_service(App::new().app_data(app_state).service(storage_status_handler)).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/storage/status").to_request(),
        )
        .await;

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["storage"], "cloudinary");
        assert_eq!(body["cloud_name"], "demo");
    }
}
