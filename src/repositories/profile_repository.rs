use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::profile::Profile,
};

/// Access to user profiles, including the bonus-point balance that passing
/// attempts increment.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Profile>>;
    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Profile>>;
    async fn add_bonus_points(&self, user_id: &str, points: i64) -> AppResult<()>;
}

pub struct MongoProfileRepository {
    collection: Collection<Profile>,
}

impl MongoProfileRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("profiles");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;

        log::info!("Created indexes for profiles collection");
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for MongoProfileRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Profile>> {
        let profile = self.collection.find_one(doc! { "id": id }).await?;
        Ok(profile)
    }

    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Profile>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let profiles = self
            .collection
            .find(doc! { "id": { "$in": ids } })
            .await?
            .try_collect()
            .await?;
        Ok(profiles)
    }

    async fn add_bonus_points(&self, user_id: &str, points: i64) -> AppResult<()> {
        let result = self
            .collection
            .update_one(
                doc! { "id": user_id },
                doc! { "$inc": { "bonus_points": points } },
            )
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Profile with id '{}' not found",
                user_id
            )));
        }

        Ok(())
    }
}
