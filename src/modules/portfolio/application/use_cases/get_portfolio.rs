use async_trait::async_trait;

use crate::portfolio::domain::entities::PortfolioView;
use crate::profile::application::ports::outgoing::ProfileRepository;
use crate::profile::domain::entities::{default_profile, ProfileView};
use crate::project::application::domain::media_normalizer::normalize_project_media;
use crate::project::application::ports::outgoing::ProjectRepository;
use crate::skill::application::ports::outgoing::SkillRepository;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetPortfolioError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IGetPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> Result<PortfolioView, GetPortfolioError>;
}

#[derive(Debug, Clone)]
pub struct GetPortfolioUseCase<P, J, S>
where
    P: ProfileRepository,
    J: ProjectRepository,
    S: SkillRepository,
{
    profiles: P,
    projects: J,
    skills: S,
}

impl<P, J, S> GetPortfolioUseCase<P, J, S>
where
    P: ProfileRepository,
    J: ProjectRepository,
    S: SkillRepository,
{
    pub fn new(profiles: P, projects: J, skills: S) -> Self {
        Self {
            profiles,
            projects,
            skills,
        }
    }
}

fn repo_err(e: impl std::fmt::Display) -> GetPortfolioError {
    GetPortfolioError::RepositoryError(e.to_string())
}

#[async_trait]
impl<P, J, S> IGetPortfolioUseCase for GetPortfolioUseCase<P, J, S>
where
    P: ProfileRepository + Send + Sync,
    J: ProjectRepository + Send + Sync,
    S: SkillRepository + Send + Sync,
{
    async fn execute(&self) -> Result<PortfolioView, GetPortfolioError> {
        let (profile, projects, skills) = futures::try_join!(
            async { self.profiles.find_current().await.map_err(repo_err) },
            async { self.projects.list().await.map_err(repo_err) },
            async { self.skills.list().await.map_err(repo_err) },
        )?;

        Ok(PortfolioView {
            profile: profile.map_or_else(default_profile, ProfileView::from),
            projects: projects.into_iter().map(normalize_project_media).collect(),
            skills: skills.into_iter().map(|s| s.name).collect(),
        })
    }
}
