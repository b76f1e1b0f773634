use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::media::application::domain::entities::{
    ImageInfo, StorageKind, UploadDescriptor, UploadedFile,
};
use crate::media::application::ports::outgoing::{
    DeleteOutcome, SaveRequest, StorageBackend, StorageError,
};
use crate::message::application::use_cases::list_messages::{
    IListMessagesUseCase, ListMessagesError,
};
use crate::message::application::use_cases::submit_message::{
    ClientMeta, ISubmitMessageUseCase, SubmitMessageError,
};
use crate::message::domain::entities::{ContactSubmission, MessageRecord};
use crate::portfolio::application::use_cases::get_portfolio::{
    GetPortfolioError, IGetPortfolioUseCase,
};
use crate::portfolio::domain::entities::PortfolioView;
use crate::profile::application::use_cases::update_profile_image::{
    IUpdateProfileImageUseCase, UpdateProfileImageError,
};
use crate::profile::application::use_cases::upsert_profile::{
    IUpsertProfileUseCase, ProfileUpdate, UpsertProfileError,
};
use crate::profile::domain::entities::{default_profile, ProfileView};
use crate::project::application::domain::entities::ProjectRecord;
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase, DeleteProjectError, DeleteProjectUseCase,
    GetProjectsError, GetProjectsUseCase, ProjectForm, UpdateProjectError, UpdateProjectUseCase,
};
use crate::skill::application::use_cases::replace_skills::{
    IReplaceSkillsUseCase, ReplaceSkillsError,
};
use crate::visualization::application::domain::entities::{
    VisualizationRecord, VisualizationView,
};
use crate::visualization::application::ports::incoming::use_cases::{
    ListVisualizationsError, ListVisualizationsUseCase, SaveVisualizationError,
    SaveVisualizationUseCase, VisualizationForm,
};

// ============================================================================
// Storage
// ============================================================================

/// Storage backend that records every call instead of touching disk or the
/// network. Local saves answer with `/{dir}/{hint}-{n}.{ext}`; remote saves
/// with an https URL and a `portfolio_uploads/{hint}-{n}` public id.
pub struct RecordingStorageBackend {
    kind: StorageKind,
    counter: AtomicUsize,
    fail_saves: AtomicBool,
    fail_deletes: AtomicBool,
    saved: Mutex<Vec<SaveRequest>>,
    deleted: Mutex<Vec<ImageInfo>>,
}

impl RecordingStorageBackend {
    fn with_kind(kind: StorageKind) -> Arc<Self> {
        Arc::new(Self {
            kind,
            counter: AtomicUsize::new(0),
            fail_saves: AtomicBool::new(false),
            fail_deletes: AtomicBool::new(false),
            saved: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
        })
    }

    pub fn local() -> Arc<Self> {
        Self::with_kind(StorageKind::Local)
    }

    pub fn remote() -> Arc<Self> {
        Self::with_kind(StorageKind::Remote)
    }

    pub fn failing_saves(self: Arc<Self>) -> Arc<Self> {
        self.fail_saves.store(true, Ordering::SeqCst);
        self
    }

    /// Deletes are still recorded before they fail.
    pub fn failing_deletes(self: Arc<Self>) -> Arc<Self> {
        self.fail_deletes.store(true, Ordering::SeqCst);
        self
    }

    pub fn saved(&self) -> Vec<SaveRequest> {
        self.saved.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<ImageInfo> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl StorageBackend for RecordingStorageBackend {
    fn kind(&self) -> StorageKind {
        self.kind
    }

    async fn save(
        &self,
        _file: &UploadedFile,
        request: &SaveRequest,
    ) -> Result<UploadDescriptor, StorageError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StorageError::Write("disk full".into()));
        }
        self.saved.lock().unwrap().push(request.clone());

        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let stem = format!("{}-{}", request.name_hint, n);
        let local_prefix = request.folder.public_prefix().to_string();

        Ok(match self.kind {
            StorageKind::Local => UploadDescriptor {
                backend: StorageKind::Local,
                path: None,
                secure_url: None,
                filename: Some(format!("{stem}.{}", request.extension)),
                public_id: None,
                local_prefix,
            },
            StorageKind::Remote => {
                let public_id = format!("portfolio_uploads/{stem}");
                UploadDescriptor {
                    backend: StorageKind::Remote,
                    path: Some(format!(
                        "http://res.cloudinary.com/test/image/upload/v1/{public_id}.{}",
                        request.extension
                    )),
                    secure_url: Some(format!(
                        "https://res.cloudinary.com/test/image/upload/v1/{public_id}.{}",
                        request.extension
                    )),
                    filename: Some(public_id.clone()),
                    public_id: Some(public_id),
                    local_prefix,
                }
            }
        })
    }

    async fn delete(&self, asset: &ImageInfo) -> Result<DeleteOutcome, StorageError> {
        self.deleted.lock().unwrap().push(asset.clone());
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(StorageError::Delete("upstream unavailable".into()));
        }
        Ok(DeleteOutcome::Deleted)
    }
}

// ============================================================================
// Auth
// ============================================================================

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

// ============================================================================
// Profile & skills
// ============================================================================

pub struct StubUpsertProfileUseCase {
    pub result: Result<ProfileView, UpsertProfileError>,
}

impl Default for StubUpsertProfileUseCase {
    fn default() -> Self {
        Self {
            result: Ok(default_profile()),
        }
    }
}

#[async_trait]
impl IUpsertProfileUseCase for StubUpsertProfileUseCase {
    async fn execute(&self, _update: ProfileUpdate) -> Result<ProfileView, UpsertProfileError> {
        self.result.clone()
    }
}

pub struct StubUpdateProfileImageUseCase {
    pub result: Result<String, UpdateProfileImageError>,
}

impl Default for StubUpdateProfileImageUseCase {
    fn default() -> Self {
        Self {
            result: Ok("/uploads/profile-1.png".to_string()),
        }
    }
}

#[async_trait]
impl IUpdateProfileImageUseCase for StubUpdateProfileImageUseCase {
    async fn execute(&self, _file: UploadedFile) -> Result<String, UpdateProfileImageError> {
        self.result.clone()
    }
}

/// Either echoes the submitted names back or fails with a fixed error.
#[derive(Default)]
pub struct StubReplaceSkillsUseCase {
    error: Option<ReplaceSkillsError>,
}

impl StubReplaceSkillsUseCase {
    pub fn echo() -> Self {
        Self { error: None }
    }

    pub fn error(error: ReplaceSkillsError) -> Self {
        Self { error: Some(error) }
    }
}

#[async_trait]
impl IReplaceSkillsUseCase for StubReplaceSkillsUseCase {
    async fn execute(&self, names: Vec<String>) -> Result<Vec<String>, ReplaceSkillsError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(names),
        }
    }
}

// ============================================================================
// Messages
// ============================================================================

/// Records the last submission; answers with a stored record unless told to
/// fail. Clones share the recording.
#[derive(Clone, Default)]
pub struct StubSubmitMessageUseCase {
    error: Option<SubmitMessageError>,
    last_call: Arc<Mutex<Option<(ContactSubmission, ClientMeta)>>>,
}

impl StubSubmitMessageUseCase {
    pub fn failing(error: SubmitMessageError) -> Self {
        Self {
            error: Some(error),
            ..Default::default()
        }
    }

    pub fn last_call(&self) -> Option<(ContactSubmission, ClientMeta)> {
        self.last_call.lock().unwrap().clone()
    }
}

#[async_trait]
impl ISubmitMessageUseCase for StubSubmitMessageUseCase {
    async fn execute(
        &self,
        submission: ContactSubmission,
        client: ClientMeta,
    ) -> Result<MessageRecord, SubmitMessageError> {
        *self.last_call.lock().unwrap() = Some((submission.clone(), client.clone()));

        if let Some(e) = &self.error {
            return Err(e.clone());
        }

        Ok(MessageRecord {
            id: Uuid::new_v4(),
            name: submission.name.unwrap_or_default(),
            email: submission.email.unwrap_or_default(),
            message: submission.message.unwrap_or_default(),
            ip: client.ip,
            user_agent: client.user_agent,
            created_at: chrono::Utc::now(),
        })
    }
}

pub struct StubListMessagesUseCase {
    pub result: Result<Vec<MessageRecord>, ListMessagesError>,
}

impl Default for StubListMessagesUseCase {
    fn default() -> Self {
        Self { result: Ok(vec![]) }
    }
}

#[async_trait]
impl IListMessagesUseCase for StubListMessagesUseCase {
    async fn execute(&self) -> Result<Vec<MessageRecord>, ListMessagesError> {
        self.result.clone()
    }
}

// ============================================================================
// Portfolio
// ============================================================================

pub struct StubGetPortfolioUseCase {
    pub result: Result<PortfolioView, GetPortfolioError>,
}

impl Default for StubGetPortfolioUseCase {
    fn default() -> Self {
        Self {
            result: Ok(PortfolioView {
                profile: default_profile(),
                projects: vec![],
                skills: vec![],
            }),
        }
    }
}

#[async_trait]
impl IGetPortfolioUseCase for StubGetPortfolioUseCase {
    async fn execute(&self) -> Result<PortfolioView, GetPortfolioError> {
        self.result.clone()
    }
}

// ============================================================================
// Projects
// ============================================================================

#[derive(Default)]
pub struct StubGetProjectsUseCase {
    projects: Vec<ProjectRecord>,
}

impl StubGetProjectsUseCase {
    pub fn success(projects: Vec<ProjectRecord>) -> Self {
        Self { projects }
    }
}

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self) -> Result<Vec<ProjectRecord>, GetProjectsError> {
        Ok(self.projects.clone())
    }
}

/// Records the form it receives and whether an image came with it.
#[derive(Clone)]
pub struct StubCreateProjectUseCase {
    result: Result<ProjectRecord, CreateProjectError>,
    last_call: Arc<Mutex<Option<(ProjectForm, bool)>>>,
}

impl StubCreateProjectUseCase {
    pub fn success(project: ProjectRecord) -> Self {
        Self {
            result: Ok(project),
            last_call: Arc::default(),
        }
    }

    pub fn error(error: CreateProjectError) -> Self {
        Self {
            result: Err(error),
            last_call: Arc::default(),
        }
    }

    pub fn last_call(&self) -> Option<(ProjectForm, bool)> {
        self.last_call.lock().unwrap().clone()
    }
}

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(
        &self,
        form: ProjectForm,
        image: Option<UploadedFile>,
    ) -> Result<ProjectRecord, CreateProjectError> {
        *self.last_call.lock().unwrap() = Some((form, image.is_some()));
        self.result.clone()
    }
}

pub struct StubUpdateProjectUseCase {
    result: Result<ProjectRecord, UpdateProjectError>,
}

impl StubUpdateProjectUseCase {
    pub fn success(project: ProjectRecord) -> Self {
        Self {
            result: Ok(project),
        }
    }

    pub fn error(error: UpdateProjectError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl UpdateProjectUseCase for StubUpdateProjectUseCase {
    async fn execute(
        &self,
        _id: Uuid,
        _form: ProjectForm,
        _image: Option<UploadedFile>,
    ) -> Result<ProjectRecord, UpdateProjectError> {
        self.result.clone()
    }
}

pub struct StubDeleteProjectUseCase {
    pub result: Result<(), DeleteProjectError>,
}

impl Default for StubDeleteProjectUseCase {
    fn default() -> Self {
        Self { result: Ok(()) }
    }
}

#[async_trait]
impl DeleteProjectUseCase for StubDeleteProjectUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteProjectError> {
        self.result.clone()
    }
}

// ============================================================================
// Visualizations
// ============================================================================

#[derive(Clone)]
pub struct StubSaveVisualizationUseCase {
    result: Result<VisualizationRecord, SaveVisualizationError>,
    last_call: Arc<Mutex<Option<(VisualizationForm, bool)>>>,
}

impl StubSaveVisualizationUseCase {
    pub fn success(record: VisualizationRecord) -> Self {
        Self {
            result: Ok(record),
            last_call: Arc::default(),
        }
    }

    pub fn error(error: SaveVisualizationError) -> Self {
        Self {
            result: Err(error),
            last_call: Arc::default(),
        }
    }

    pub fn last_call(&self) -> Option<(VisualizationForm, bool)> {
        self.last_call.lock().unwrap().clone()
    }
}

#[async_trait]
impl SaveVisualizationUseCase for StubSaveVisualizationUseCase {
    async fn execute(
        &self,
        form: VisualizationForm,
        image: Option<UploadedFile>,
    ) -> Result<VisualizationRecord, SaveVisualizationError> {
        *self.last_call.lock().unwrap() = Some((form, image.is_some()));
        self.result.clone()
    }
}

/// Returns fixed views and remembers the filter it was asked for.
#[derive(Clone, Default)]
pub struct StubListVisualizationsUseCase {
    views: Vec<VisualizationView>,
    last_filter: Arc<Mutex<Option<Option<String>>>>,
}

impl StubListVisualizationsUseCase {
    pub fn success(views: Vec<VisualizationView>) -> Self {
        Self {
            views,
            last_filter: Arc::default(),
        }
    }

    pub fn last_filter(&self) -> Option<Option<String>> {
        self.last_filter.lock().unwrap().clone()
    }
}

#[async_trait]
impl ListVisualizationsUseCase for StubListVisualizationsUseCase {
    async fn execute(
        &self,
        report_type: Option<String>,
    ) -> Result<Vec<VisualizationView>, ListVisualizationsError> {
        *self.last_filter.lock().unwrap() = Some(report_type);
        Ok(self.views.clone())
    }
}
