use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::profile::application::ports::outgoing::{
    NewProfile, ProfileChanges, ProfileRepository, ProfileRepositoryError,
};
use crate::profile::domain::entities::{ProfileRecord, DEFAULT_PROFILE_IMAGE};

pub fn sample_profile() -> ProfileRecord {
    let created_at = Utc.with_ymd_and_hms(2025, 1, 10, 8, 30, 0).unwrap();
    ProfileRecord {
        id: Uuid::from_u128(0x5a4d_1e00_0000_4000_8000_0000_0000_0001),
        name: "Jane Smith".to_string(),
        title: "Data Engineer".to_string(),
        bio: "Builds pipelines and dashboards.".to_string(),
        email: "jane@example.com".to_string(),
        github: Some("https://github.com/jane".to_string()),
        linkedin: Some("https://linkedin.com/in/jane".to_string()),
        profile_image: DEFAULT_PROFILE_IMAGE.to_string(),
        profile_image_public_id: None,
        created_at,
        updated_at: created_at,
    }
}

/// Holds at most the rows it is given or creates. Clones share state.
#[derive(Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<Mutex<Vec<ProfileRecord>>>,
    fail: bool,
}

impl InMemoryProfileRepository {
    pub fn with_profile(profile: ProfileRecord) -> Self {
        Self {
            profiles: Arc::new(Mutex::new(vec![profile])),
            fail: false,
        }
    }

    /// Every call errors.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn count(&self) -> usize {
        self.profiles.lock().unwrap().len()
    }

    pub fn current(&self) -> Option<ProfileRecord> {
        self.profiles.lock().unwrap().first().cloned()
    }

    fn check(&self) -> Result<(), ProfileRepositoryError> {
        if self.fail {
            return Err(ProfileRepositoryError::DatabaseError("connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_current(&self) -> Result<Option<ProfileRecord>, ProfileRepositoryError> {
        self.check()?;
        Ok(self.current())
    }

    async fn create(&self, data: NewProfile) -> Result<ProfileRecord, ProfileRepositoryError> {
        self.check()?;
        let now = Utc::now();
        let record = ProfileRecord {
            id: Uuid::new_v4(),
            name: data.name,
            title: data.title,
            bio: data.bio,
            email: data.email,
            github: data.github,
            linkedin: data.linkedin,
            profile_image: data.profile_image,
            profile_image_public_id: data.profile_image_public_id,
            created_at: now,
            updated_at: now,
        };
        self.profiles.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: ProfileChanges,
    ) -> Result<ProfileRecord, ProfileRepositoryError> {
        self.check()?;
        let mut profiles = self.profiles.lock().unwrap();
        let profile = profiles
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ProfileRepositoryError::NotFound)?;

        if let Some(name) = changes.name {
            profile.name = name;
        }
        if let Some(title) = changes.title {
            profile.title = title;
        }
        if let Some(bio) = changes.bio {
            profile.bio = bio;
        }
        if let Some(email) = changes.email {
            profile.email = email;
        }
        if let Some(image) = changes.profile_image {
            profile.profile_image = image;
        }
        changes.github.apply_to(&mut profile.github);
        changes.linkedin.apply_to(&mut profile.linkedin);
        changes
            .profile_image_public_id
            .apply_to(&mut profile.profile_image_public_id);
        profile.updated_at = Utc::now();

        Ok(profile.clone())
    }
}
