pub mod modules;
pub use modules::auth;
pub use modules::media;
pub use modules::message;
pub use modules::portfolio;
pub use modules::profile;
pub use modules::project;
pub use modules::skill;
pub use modules::visualization;

pub mod api;
pub mod config;
pub mod frontend;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::BcryptHasher;
use crate::auth::adapter::outgoing::UserQueryPostgres;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::use_cases::login_user::{ILoginUserUseCase, LoginUserUseCase};

use crate::media::adapter::outgoing::{select_backend, StorageConfig};
use crate::media::application::domain::entities::StorageStatus;
use crate::media::application::domain::policies::UploadPolicy;
use crate::media::application::services::MediaStorage;

use crate::message::adapter::outgoing::MessageRepoPostgres;
use crate::message::application::use_cases::list_messages::{
    IListMessagesUseCase, ListMessagesUseCase,
};
use crate::message::application::use_cases::submit_message::{
    ISubmitMessageUseCase, SubmitMessageUseCase,
};

use crate::portfolio::application::use_cases::get_portfolio::{
    GetPortfolioUseCase, IGetPortfolioUseCase,
};

use crate::profile::adapter::outgoing::ProfileRepoPostgres;
use crate::profile::application::use_cases::update_profile_image::{
    IUpdateProfileImageUseCase, UpdateProfileImageUseCase,
};
use crate::profile::application::use_cases::upsert_profile::{
    IUpsertProfileUseCase, UpsertProfileUseCase,
};

use crate::project::adapter::outgoing::ProjectRepositoryPostgres;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectsService, UpdateProjectService,
};

use crate::skill::adapter::outgoing::SkillRepoPostgres;
use crate::skill::application::use_cases::replace_skills::{
    IReplaceSkillsUseCase, ReplaceSkillsUseCase,
};

use crate::visualization::adapter::outgoing::VisualizationRepositoryPostgres;
use crate::visualization::application::service::{
    ListVisualizationsService, SaveVisualizationService,
};
use crate::visualization::application::visualization_use_cases::VisualizationUseCases;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::frontend::StaticDirs;
use crate::shared::api::custom_json_config;
use crate::shared::cors::cors_policy;

use actix_web::{middleware::Logger, web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub upsert_profile_use_case: Arc<dyn IUpsertProfileUseCase + Send + Sync>,
    pub update_profile_image_use_case: Arc<dyn IUpdateProfileImageUseCase + Send + Sync>,
    pub replace_skills_use_case: Arc<dyn IReplaceSkillsUseCase + Send + Sync>,
    pub submit_message_use_case: Arc<dyn ISubmitMessageUseCase + Send + Sync>,
    pub list_messages_use_case: Arc<dyn IListMessagesUseCase + Send + Sync>,
    pub get_portfolio_use_case: Arc<dyn IGetPortfolioUseCase + Send + Sync>,
    pub project: ProjectUseCases,
    pub visualization: VisualizationUseCases,
    pub storage_status: StorageStatus,
    pub upload_policy: UploadPolicy,
}

#[actix_web::main]
async fn start() -> io::Result<()> {
    let config = AppConfig::load().map_err(io::Error::other)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(environment = config.env.as_str(), "Starting application...");

    // Database
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(io::Error::other)?;
    if config.run_migrations {
        Migrator::up(&conn, None).await.map_err(io::Error::other)?;
        info!("Migrations applied");
    }
    let db_arc = Arc::new(conn);

    // Storage
    let storage_config = StorageConfig::from_env();
    let storage_status = storage_config.status();
    info!(storage = %storage_status.storage, "Storage mode selected");
    if config.is_production() && !storage_status.storage.is_remote() {
        warn!("Cloudinary is not configured; uploaded files are written to local disk and will not survive a redeploy");
    }
    let backend = select_backend(&storage_config, &config.public_dir).await?;
    let upload_policy = UploadPolicy::default();
    let media = MediaStorage::new(backend, upload_policy.clone());

    // Auth
    let jwt_service = JwtTokenService::new(JwtConfig::from_env().map_err(io::Error::other)?);
    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let login_user_use_case = LoginUserUseCase::new(
        UserQueryPostgres::new(Arc::clone(&db_arc)),
        Arc::new(BcryptHasher::default()),
        Arc::clone(&token_provider),
    );

    // Repositories
    let profile_repo = ProfileRepoPostgres::new(Arc::clone(&db_arc));
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let skill_repo = SkillRepoPostgres::new(Arc::clone(&db_arc));
    let message_repo = MessageRepoPostgres::new(Arc::clone(&db_arc));
    let visualization_repo = VisualizationRepositoryPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        login_user_use_case: Arc::new(login_user_use_case),
        upsert_profile_use_case: Arc::new(UpsertProfileUseCase::new(profile_repo.clone())),
        update_profile_image_use_case: Arc::new(UpdateProfileImageUseCase::new(
            profile_repo.clone(),
            media.clone(),
        )),
        replace_skills_use_case: Arc::new(ReplaceSkillsUseCase::new(skill_repo.clone())),
        submit_message_use_case: Arc::new(SubmitMessageUseCase::new(message_repo.clone())),
        list_messages_use_case: Arc::new(ListMessagesUseCase::new(message_repo)),
        get_portfolio_use_case: Arc::new(GetPortfolioUseCase::new(
            profile_repo,
            project_repo.clone(),
            skill_repo,
        )),
        project: ProjectUseCases {
            create: Arc::new(CreateProjectService::new(project_repo.clone(), media.clone())),
            get_list: Arc::new(GetProjectsService::new(project_repo.clone())),
            update: Arc::new(UpdateProjectService::new(project_repo.clone(), media.clone())),
            delete: Arc::new(DeleteProjectService::new(project_repo, media.clone())),
        },
        visualization: VisualizationUseCases {
            save: Arc::new(SaveVisualizationService::new(
                visualization_repo.clone(),
                media,
            )),
            list: Arc::new(ListVisualizationsService::new(visualization_repo)),
        },
        storage_status,
        upload_policy,
    };

    let static_dirs = StaticDirs {
        public_dir: config.public_dir.clone(),
        frontend_dir: config.frontend_dir.clone(),
    };
    if !static_dirs.frontend_dir.is_dir() {
        warn!(path = %static_dirs.frontend_dir.display(), "Frontend build directory not found");
    }

    let bind_address = config.bind_address();
    let production = config.is_production();
    let config_data = web::Data::new(config);
    let static_data = web::Data::new(static_dirs);
    let openapi = ApiDoc::openapi();

    info!(address = %bind_address, "Server listening");

    HttpServer::new(move || {
        let dirs = static_data.get_ref().clone();
        App::new()
            .wrap(cors_policy(production))
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(config_data.clone())
            .app_data(static_data.clone())
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(move |cfg| frontend::configure_static(cfg, &dirs))
            .default_service(web::to(frontend::fallback))
    })
    .bind(bind_address)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::smoke_test);
    cfg.service(crate::health::health);
    // Public
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(crate::visualization::adapter::incoming::web::routes::list_visualizations_handler);
    cfg.service(crate::message::adapter::incoming::web::routes::submit_contact_handler);
    cfg.service(crate::media::adapter::incoming::web::routes::storage_status_handler);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::verify_token_handler);
    // Admin
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_admin_portfolio_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::upsert_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::upload_profile_image_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::delete_project_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::replace_skills_handler);
    cfg.service(crate::message::adapter::incoming::web::routes::list_messages_handler);
    cfg.service(crate::visualization::adapter::incoming::web::routes::save_visualization_handler);
    cfg.service(
        crate::visualization::adapter::incoming::web::routes::list_admin_visualizations_handler,
    );
}

fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
