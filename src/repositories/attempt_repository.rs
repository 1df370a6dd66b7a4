use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::attempt::AttemptRecord};

/// Insert-only store of completed attempts. `find_all` feeds the
/// leaderboard fold; the paginated reader feeds a learner's history view.
#[async_trait]
pub trait AttemptRepository: Send + Sync {
    async fn insert(&self, record: AttemptRecord) -> AppResult<AttemptRecord>;
    async fn find_all(&self) -> AppResult<Vec<AttemptRecord>>;
    async fn get_user_attempts<'a>(
        &self,
        user_id: &str,
        quiz_id: Option<&'a str>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<AttemptRecord>, i64)>;
    async fn count_user_attempts(&self, user_id: &str, quiz_id: &str) -> AppResult<usize>;
}

pub struct MongoAttemptRepository {
    collection: Collection<AttemptRecord>,
}

impl MongoAttemptRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quiz_attempts");
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

        let user_quiz_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "quiz_id": 1 })
            .options(IndexOptions::builder().name("user_quiz".to_string()).build())
            .build();

        let user_id_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder().name("user_id".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(user_quiz_index).await?;
        self.collection.create_index(user_id_index).await?;

        log::info!("Created indexes for quiz_attempts collection");
        Ok(())
    }
}

#[async_trait]
impl AttemptRepository for MongoAttemptRepository {
    async fn insert(&self, record: AttemptRecord) -> AppResult<AttemptRecord> {
        self.collection.insert_one(&record).await?;
        Ok(record)
    }

    async fn find_all(&self) -> AppResult<Vec<AttemptRecord>> {
        let records = self
            .collection
            .find(doc! {})
            .await?
            .try_collect()
            .await?;
        Ok(records)
    }

    async fn get_user_attempts<'a>(
        &self,
        user_id: &str,
        quiz_id: Option<&'a str>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<AttemptRecord>, i64)> {
        let mut filter = doc! { "user_id": user_id };

        if let Some(qid) = quiz_id {
            filter.insert("quiz_id", qid);
        }

        let total = self.collection.count_documents(filter.clone()).await?;

        let records = self
            .collection
            .find(filter)
            .skip(offset.max(0) as u64)
            .limit(limit)
            .sort(doc! { "attempted_at": -1 })
            .await?
            .try_collect()
            .await?;

        Ok((records, total as i64))
    }

    async fn count_user_attempts(&self, user_id: &str, quiz_id: &str) -> AppResult<usize> {
        let count = self
            .collection
            .count_documents(doc! {
                "user_id": user_id,
                "quiz_id": quiz_id
            })
            .await?;
        Ok(count as usize)
    }
}
