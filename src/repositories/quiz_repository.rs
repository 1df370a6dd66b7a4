use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::quiz::QuizRecord};

/// Read access to stored quizzes. Questions are embedded in the quiz
/// document, so one fetch returns the whole definition.
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizRecord>>;
    async fn list_quizzes(&self, offset: i64, limit: i64) -> AppResult<(Vec<QuizRecord>, i64)>;
}

pub struct MongoQuizRepository {
    collection: Collection<QuizRecord>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quizzes");
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

        log::info!("Created indexes for quizzes collection");
        Ok(())
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizRecord>> {
        let quiz = self.collection.find_one(doc! { "id": id }).await?;
        Ok(quiz)
    }

    async fn list_quizzes(&self, offset: i64, limit: i64) -> AppResult<(Vec<QuizRecord>, i64)> {
        let total = self.collection.count_documents(doc! {}).await?;

        let quizzes = self
            .collection
            .find(doc! {})
            .sort(doc! { "title": 1 })
            .skip(offset.max(0) as u64)
            .limit(limit)
            .await?
            .try_collect()
            .await?;

        Ok((quizzes, total as i64))
    }
}
