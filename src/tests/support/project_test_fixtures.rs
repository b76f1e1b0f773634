use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use crate::project::application::domain::entities::{ProjectRecord, DEFAULT_PROJECT_IMAGE};
use crate::project::application::ports::outgoing::project_repository::{
    NewProject, ProjectChanges, ProjectRepository, ProjectRepositoryError,
};

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap()
}

pub fn sample_project(title: &str, order: i32) -> ProjectRecord {
    let created_at = base_time() + Duration::minutes(order as i64);
    ProjectRecord {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: format!("{title} description"),
        technologies: vec!["Rust".to_string(), "PostgreSQL".to_string()],
        github: Some(format!("https://github.com/me/{}", title.to_lowercase())),
        demo: None,
        featured: false,
        image: DEFAULT_PROJECT_IMAGE.to_string(),
        image_public_id: None,
        order,
        created_at,
        updated_at: created_at,
    }
}

/// Project store backed by a vector. Clones share state.
#[derive(Clone, Default)]
pub struct InMemoryProjectRepository {
    projects: Arc<Mutex<Vec<ProjectRecord>>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl InMemoryProjectRepository {
    pub fn with_projects(projects: Vec<ProjectRecord>) -> Self {
        Self {
            projects: Arc::new(Mutex::new(projects)),
            ..Default::default()
        }
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn snapshot(&self) -> Vec<ProjectRecord> {
        self.projects.lock().unwrap().clone()
    }

    fn check_read(&self) -> Result<(), ProjectRepositoryError> {
        if self.fail_reads {
            return Err(ProjectRepositoryError::DatabaseError("read failed".into()));
        }
        Ok(())
    }

    fn check_write(&self) -> Result<(), ProjectRepositoryError> {
        if self.fail_writes {
            return Err(ProjectRepositoryError::DatabaseError("write failed".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn list(&self) -> Result<Vec<ProjectRecord>, ProjectRepositoryError> {
        self.check_read()?;
        let mut projects = self.snapshot();
        projects.sort_by(|a, b| {
            a.order
                .cmp(&b.order)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(projects)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProjectRecord>, ProjectRepositoryError> {
        self.check_read()?;
        Ok(self.snapshot().into_iter().find(|p| p.id == id))
    }

    async fn create(&self, data: NewProject) -> Result<ProjectRecord, ProjectRepositoryError> {
        self.check_write()?;
        let mut projects = self.projects.lock().unwrap();
        let order = projects.iter().map(|p| p.order).max().map_or(0, |o| o + 1);
        let now = Utc::now();
        let record = ProjectRecord {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            technologies: data.technologies,
            github: data.github,
            demo: data.demo,
            featured: data.featured,
            image: data.image,
            image_public_id: data.image_public_id,
            order,
            created_at: now,
            updated_at: now,
        };
        projects.push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: ProjectChanges,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        self.check_write()?;
        let mut projects = self.projects.lock().unwrap();
        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ProjectRepositoryError::NotFound)?;

        if let Some(title) = changes.title {
            project.title = title;
        }
        if let Some(description) = changes.description {
            project.description = description;
        }
        if let Some(technologies) = changes.technologies {
            project.technologies = technologies;
        }
        if let Some(featured) = changes.featured {
            project.featured = featured;
        }
        if let Some(order) = changes.order {
            project.order = order;
        }
        if let Some(image) = changes.image {
            project.image = image;
        }
        changes.github.apply_to(&mut project.github);
        changes.demo.apply_to(&mut project.demo);
        changes.image_public_id.apply_to(&mut project.image_public_id);
        project.updated_at = Utc::now();

        Ok(project.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<Option<ProjectRecord>, ProjectRepositoryError> {
        self.check_write()?;
        let mut projects = self.projects.lock().unwrap();
        let removed = projects
            .iter()
            .position(|p| p.id == id)
            .map(|idx| projects.remove(idx));
        Ok(removed)
    }
}
