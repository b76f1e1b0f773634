use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::media::application::domain::entities::{StorageKind, StorageStatus};
use crate::media::application::domain::policies::UploadPolicy;
use crate::message::application::use_cases::list_messages::IListMessagesUseCase;
use crate::message::application::use_cases::submit_message::ISubmitMessageUseCase;
use crate::portfolio::application::use_cases::get_portfolio::IGetPortfolioUseCase;
use crate::profile::application::use_cases::update_profile_image::IUpdateProfileImageUseCase;
use crate::profile::application::use_cases::upsert_profile::IUpsertProfileUseCase;
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectsUseCase, UpdateProjectUseCase,
};
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::skill::application::use_cases::replace_skills::IReplaceSkillsUseCase;
use crate::tests::support::project_test_fixtures::sample_project;
use crate::tests::support::stubs::*;
use crate::visualization::application::ports::incoming::use_cases::{
    ListVisualizationsUseCase, SaveVisualizationError, SaveVisualizationUseCase,
};
use crate::visualization::application::visualization_use_cases::VisualizationUseCases;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    upsert_profile: Arc<dyn IUpsertProfileUseCase + Send + Sync>,
    update_profile_image: Arc<dyn IUpdateProfileImageUseCase + Send + Sync>,
    replace_skills: Arc<dyn IReplaceSkillsUseCase + Send + Sync>,
    submit_message: Arc<dyn ISubmitMessageUseCase + Send + Sync>,
    list_messages: Arc<dyn IListMessagesUseCase + Send + Sync>,
    get_portfolio: Arc<dyn IGetPortfolioUseCase + Send + Sync>,
    create_project: Arc<dyn CreateProjectUseCase + Send + Sync>,
    get_projects: Arc<dyn GetProjectsUseCase + Send + Sync>,
    update_project: Arc<dyn UpdateProjectUseCase + Send + Sync>,
    delete_project: Arc<dyn DeleteProjectUseCase + Send + Sync>,
    save_visualization: Arc<dyn SaveVisualizationUseCase + Send + Sync>,
    list_visualizations: Arc<dyn ListVisualizationsUseCase + Send + Sync>,
    storage_status: StorageStatus,
    upload_policy: UploadPolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            login_user: Arc::new(StubLoginUserUseCase),
            upsert_profile: Arc::new(StubUpsertProfileUseCase::default()),
            update_profile_image: Arc::new(StubUpdateProfileImageUseCase::default()),
            replace_skills: Arc::new(StubReplaceSkillsUseCase::echo()),
            submit_message: Arc::new(StubSubmitMessageUseCase::default()),
            list_messages: Arc::new(StubListMessagesUseCase::default()),
            get_portfolio: Arc::new(StubGetPortfolioUseCase::default()),
            create_project: Arc::new(StubCreateProjectUseCase::success(sample_project(
                "Stub", 0,
            ))),
            get_projects: Arc::new(StubGetProjectsUseCase::default()),
            update_project: Arc::new(StubUpdateProjectUseCase::success(sample_project(
                "Stub", 0,
            ))),
            delete_project: Arc::new(StubDeleteProjectUseCase::default()),
            save_visualization: Arc::new(StubSaveVisualizationUseCase::error(
                SaveVisualizationError::MissingFile,
            )),
            list_visualizations: Arc::new(StubListVisualizationsUseCase::default()),
            storage_status: StorageStatus {
                storage: StorageKind::Local,
                cloud_name: None,
            },
            upload_policy: UploadPolicy::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_upsert_profile(
        mut self,
        uc: impl IUpsertProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.upsert_profile = Arc::new(uc);
        self
    }

    pub fn with_update_profile_image(
        mut self,
        uc: impl IUpdateProfileImageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_profile_image = Arc::new(uc);
        self
    }

    pub fn with_replace_skills(
        mut self,
        uc: impl IReplaceSkillsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.replace_skills = Arc::new(uc);
        self
    }

    pub fn with_submit_message(
        mut self,
        uc: impl ISubmitMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_message = Arc::new(uc);
        self
    }

    pub fn with_list_messages(
        mut self,
        uc: impl IListMessagesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_messages = Arc::new(uc);
        self
    }

    pub fn with_get_portfolio(
        mut self,
        uc: impl IGetPortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_portfolio = Arc::new(uc);
        self
    }

    pub fn with_create_project(
        mut self,
        uc: impl CreateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_project = Arc::new(uc);
        self
    }

    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + Send + Sync + 'static) -> Self {
        self.get_projects = Arc::new(uc);
        self
    }

    pub fn with_update_project(
        mut self,
        uc: impl UpdateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_project = Arc::new(uc);
        self
    }

    pub fn with_delete_project(
        mut self,
        uc: impl DeleteProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_project = Arc::new(uc);
        self
    }

    pub fn with_save_visualization(
        mut self,
        uc: impl SaveVisualizationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.save_visualization = Arc::new(uc);
        self
    }

    pub fn with_list_visualizations(
        mut self,
        uc: impl ListVisualizationsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_visualizations = Arc::new(uc);
        self
    }

    pub fn with_storage_status(mut self, status: StorageStatus) -> Self {
        self.storage_status = status;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            login_user_use_case: self.login_user,
            upsert_profile_use_case: self.upsert_profile,
            update_profile_image_use_case: self.update_profile_image,
            replace_skills_use_case: self.replace_skills,
            submit_message_use_case: self.submit_message,
            list_messages_use_case: self.list_messages,
            get_portfolio_use_case: self.get_portfolio,
            project: ProjectUseCases {
                create: self.create_project,
                get_list: self.get_projects,
                update: self.update_project,
                delete: self.delete_project,
            },
            visualization: VisualizationUseCases {
                save: self.save_visualization,
                list: self.list_visualizations,
            },
            storage_status: self.storage_status,
            upload_policy: self.upload_policy,
        })
    }
}
