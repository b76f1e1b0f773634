use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, VerifyTokenResponse,
};
use crate::media::application::domain::entities::StorageStatus;
use crate::message::adapter::incoming::web::routes::{
    ContactRequest, ContactResponse, MessagesResponse,
};
use crate::portfolio::domain::entities::PortfolioView;
use crate::profile::adapter::incoming::web::routes::{ProfileEnvelope, ProfileImageResponse};
use crate::profile::application::use_cases::upsert_profile::ProfileUpdate;
use crate::project::adapter::incoming::web::routes::ProjectEnvelope;
use crate::skill::adapter::incoming::web::routes::{ReplaceSkillsRequest, SkillsResponse};
use crate::visualization::adapter::incoming::web::routes::SaveVisualizationResponse;
use crate::visualization::application::domain::entities::VisualizationView;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Public portfolio data, contact form and the admin content API"
    ),
    paths(
        // Health
        crate::health::smoke_test,
        crate::health::health,

        // Public
        crate::portfolio::adapter::incoming::web::routes::get_portfolio_handler,
        crate::visualization::adapter::incoming::web::routes::list_visualizations_handler,
        crate::message::adapter::incoming::web::routes::submit_contact_handler,
        crate::media::adapter::incoming::web::routes::storage_status_handler,

        // Auth
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::verify_token_handler,

        // Admin content
        crate::portfolio::adapter::incoming::web::routes::get_admin_portfolio_handler,
        crate::profile::adapter::incoming::web::routes::upsert_profile_handler,
        crate::profile::adapter::incoming::web::routes::upload_profile_image_handler,
        crate::project::adapter::incoming::web::routes::get_projects_handler,
        crate::project::adapter::incoming::web::routes::create_project_handler,
        crate::project::adapter::incoming::web::routes::update_project_handler,
        crate::project::adapter::incoming::web::routes::delete_project_handler,
        crate::skill::adapter::incoming::web::routes::replace_skills_handler,
        crate::message::adapter::incoming::web::routes::list_messages_handler,
        crate::visualization::adapter::incoming::web::routes::save_visualization_handler,
        crate::visualization::adapter::incoming::web::routes::list_admin_visualizations_handler,
    ),
    components(
        schemas(
            SuccessResponse,
            ErrorResponse,
            ErrorDetail,
            LoginRequestDto,
            LoginResponse,
            VerifyTokenResponse,
            PortfolioView,
            ProfileUpdate,
            ProfileEnvelope,
            ProfileImageResponse,
            ProjectEnvelope,
            ReplaceSkillsRequest,
            SkillsResponse,
            ContactRequest,
            ContactResponse,
            MessagesResponse,
            SaveVisualizationResponse,
            VisualizationView,
            StorageStatus,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Liveness endpoints"),
        (name = "public", description = "Unauthenticated site data"),
        (name = "auth", description = "Admin login"),
        (name = "portfolio", description = "Admin portfolio aggregate"),
        (name = "profile", description = "Owner profile"),
        (name = "projects", description = "Project management"),
        (name = "skills", description = "Skill list"),
        (name = "messages", description = "Contact messages"),
        (name = "visualizations", description = "Report chart images"),
        (name = "media", description = "Storage backend"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token from /api/admin/login"))
                        .build(),
                ),
            )
        }
    }
}
