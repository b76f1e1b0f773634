use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::message::application::use_cases::list_messages::ListMessagesError;
use crate::message::domain::entities::MessageRecord;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct MessagesResponse {
    pub messages: Vec<MessageRecord>,
}

/// Contact messages, newest first
#[utoipa::path(
    get,
    path = "/api/admin/messages",
    tag = "messages",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All messages", body = MessagesResponse),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
    )
)]
#[get("/api/admin/messages")]
pub async fn list_messages_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.list_messages_use_case.execute().await {
        Ok(messages) => HttpResponse::Ok().json(MessagesResponse { messages }),
        Err(ListMessagesError::RepositoryError(e)) => {
            error!("Failed to list messages: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::{token_for_role, token_provider_data};
    use crate::tests::support::stubs::StubListMessagesUseCase;
    use actix_web::{test, App};
    use chrono::Utc;
    use serde_json::Value;
    use uuid::Uuid;

    #[actix_web::test]
    async fn test_list_messages_wraps_in_messages_key() {
        let record = MessageRecord {
            id: Uuid::new_v4(),
            name: "Alice".into(),
            email: "a@example.com".into(),
            message: "hi".into(),
            ip: None,
            user_agent: Some("curl".into()),
            created_at: Utc::now(),
        };
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_list_messages(StubListMessagesUseCase {
                            result: Ok(vec![record]),
                        })
                        .build(),
                )
                .app_data(token_provider_data())
                .service(list_messages_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/messages")
            .insert_header(("Authorization", format!("Bearer {}", token_for_role("admin"))))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["messages"][0]["name"], "Alice");
        assert_eq!(body["messages"][0]["userAgent"], "curl");
    }

    #[actix_web::test]
    async fn test_list_messages_invalid_token_is_403() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(token_provider_data())
                .service(list_messages_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/messages")
            .insert_header(("Authorization", "Bearer not.a.jwt"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 403);
    }
}
