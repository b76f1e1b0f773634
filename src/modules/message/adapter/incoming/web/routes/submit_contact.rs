use actix_web::{post, web, HttpRequest, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::message::application::use_cases::submit_message::{ClientMeta, SubmitMessageError};
use crate::message::domain::entities::ContactSubmission;
use crate::shared::api::ApiResponse;
use crate::AppState;

const THANK_YOU: &str = "Thank you for your message! I will get back to you soon.";

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ContactRequest {
    #[schema(example = "Alice")]
    pub name: Option<String>,
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
    #[schema(example = "Hi, I'd like to talk about a project.")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactResponse {
    pub message: String,
}

/// Send a message through the contact form
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "public",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message stored", body = ContactResponse),
        (status = 400, description = "Missing field or invalid email", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: HttpRequest,
    body: web::Json<ContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = body.into_inner();
    let submission = ContactSubmission {
        name: body.name,
        email: body.email,
        message: body.message,
    };
    let client = ClientMeta {
        ip: req.connection_info().realip_remote_addr().map(str::to_string),
        user_agent: req
            .headers()
            .get("User-Agent")
            .and_then(|h| h.to_str().ok())
            .map(str::to_string),
    };

    match data.submit_message_use_case.execute(submission, client).await {
        Ok(_) => ApiResponse::success(ContactResponse {
            message: THANK_YOU.to_string(),
        }),
        Err(SubmitMessageError::Invalid(e)) => ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
        Err(SubmitMessageError::RepositoryError(e)) => {
            error!("Failed to store contact message: {}", e);
            ApiResponse::internal_error()
        }
    }
}
