use serde::Serialize;
use utoipa::ToSchema;

use crate::profile::domain::entities::ProfileView;
use crate::project::application::domain::entities::ProjectRecord;

/// Everything the public site renders in one payload.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PortfolioView {
    pub profile: ProfileView,
    pub projects: Vec<ProjectRecord>,
    /// Skill names in display order.
    pub skills: Vec<String>,
}
