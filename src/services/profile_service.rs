use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::profile::Profile,
    repositories::ProfileRepository,
};

pub struct ProfileService {
    repository: Arc<dyn ProfileRepository>,
}

impl ProfileService {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_profile(&self, id: &str) -> AppResult<Profile> {
        let profile = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Profile with id '{}' not found", id)))?;

        Ok(profile)
    }
}
