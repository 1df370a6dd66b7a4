use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use learnhub_server::{
    errors::{AppError, AppResult},
    models::domain::{attempt::AttemptRecord, profile::Profile, quiz::QuizRecord},
    repositories::{AttemptRepository, ProfileRepository, QuizRepository},
};

pub struct InMemoryQuizRepository {
    quizzes: Arc<RwLock<HashMap<String, QuizRecord>>>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self {
            quizzes: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn seed(&self, record: QuizRecord) {
        let mut quizzes = self.quizzes.write().await;
        quizzes.insert(record.id.clone(), record);
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizRecord>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.get(id).cloned())
    }

    async fn list_quizzes(&self, offset: i64, limit: i64) -> AppResult<(Vec<QuizRecord>, i64)> {
        let quizzes = self.quizzes.read().await;
        let mut items: Vec<_> = quizzes.values().cloned().collect();
        items.sort_by(|a, b| a.title.cmp(&b.title));

        let total = items.len() as i64;
        let start = offset.max(0) as usize;
        let end = (start + limit.max(0) as usize).min(items.len());

        let page = if start >= items.len() {
            vec![]
        } else {
            items[start..end].to_vec()
        };

        Ok((page, total))
    }
}

pub struct InMemoryAttemptRepository {
    attempts: Arc<RwLock<HashMap<String, AttemptRecord>>>,
}

impl InMemoryAttemptRepository {
    pub fn new() -> Self {
        Self {
            attempts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn all(&self) -> Vec<AttemptRecord> {
        let attempts = self.attempts.read().await;
        attempts.values().cloned().collect()
    }
}

#[async_trait]
impl AttemptRepository for InMemoryAttemptRepository {
    async fn insert(&self, record: AttemptRecord) -> AppResult<AttemptRecord> {
        let mut attempts = self.attempts.write().await;
        if attempts.contains_key(&record.id) {
            return Err(AppError::AlreadyExists(format!(
                "Attempt with id '{}' already exists",
                record.id
            )));
        }
        attempts.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn find_all(&self) -> AppResult<Vec<AttemptRecord>> {
        let attempts = self.attempts.read().await;
        Ok(attempts.values().cloned().collect())
    }

    async fn get_user_attempts<'a>(
        &self,
        user_id: &str,
        quiz_id: Option<&'a str>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<AttemptRecord>, i64)> {
        let attempts = self.attempts.read().await;
        let mut items: Vec<_> = attempts
            .values()
            .filter(|a| {
                a.user_id == user_id && quiz_id.map(|qid| a.quiz_id == qid).unwrap_or(true)
            })
            .cloned()
            .collect();

        items.sort_by(|a, b| b.attempted_at.cmp(&a.attempted_at));

        let total = items.len() as i64;
        let start = offset.max(0) as usize;
        let end = (start + limit.max(0) as usize).min(items.len());

        let page = if start >= items.len() {
            vec![]
        } else {
            items[start..end].to_vec()
        };

        Ok((page, total))
    }

    async fn count_user_attempts(&self, user_id: &str, quiz_id: &str) -> AppResult<usize> {
        let attempts = self.attempts.read().await;
        Ok(attempts
            .values()
            .filter(|a| a.user_id == user_id && a.quiz_id == quiz_id)
            .count())
    }
}

pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<String, Profile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn seed(&self, profile: Profile) {
        let mut profiles = self.profiles.write().await;
        profiles.insert(profile.id.clone(), profile);
    }

    pub async fn bonus_points_of(&self, id: &str) -> Option<i64> {
        let profiles = self.profiles.read().await;
        profiles.get(id).map(|p| p.bonus_points)
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Profile>> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(id).cloned())
    }

    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Profile>> {
        let profiles = self.profiles.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| profiles.get(id).cloned())
            .collect())
    }

    async fn add_bonus_points(&self, user_id: &str, points: i64) -> AppResult<()> {
        let mut profiles = self.profiles.write().await;
        let profile = profiles.get_mut(user_id).ok_or_else(|| {
            AppError::NotFound(format!("Profile with id '{}' not found", user_id))
        })?;

        profile.bonus_points += points;
        Ok(())
    }
}
