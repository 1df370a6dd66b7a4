use std::sync::Arc;

use crate::{
    auth::CurrentUser,
    errors::AppResult,
    models::domain::attempt::{AttemptOutcome, AttemptRecord},
    repositories::{AttemptRepository, ProfileRepository},
};

/// Reward added to a user's bonus-point balance for a passing attempt.
pub const PASS_BONUS_POINTS: i64 = 10;

/// What actually happened to the side effects of a completed attempt.
/// The scored outcome stays authoritative for display either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttemptReceipt {
    pub recorded: bool,
    pub bonus_awarded: bool,
}

pub struct AttemptService {
    attempts: Arc<dyn AttemptRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl AttemptService {
    pub fn new(attempts: Arc<dyn AttemptRepository>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { attempts, profiles }
    }

    /// Run the two post-scoring side effects, in order: persist the
    /// attempt record, then award the pass reward. The bonus step only
    /// runs after a successful insert, for a passed attempt, for an
    /// authenticated user. Failures are logged and swallowed; neither is
    /// retried. Anonymous attempts skip both.
    pub async fn finalize_attempt(
        &self,
        quiz_id: &str,
        outcome: &AttemptOutcome,
        user: Option<&CurrentUser>,
    ) -> AttemptReceipt {
        let Some(user) = user else {
            return AttemptReceipt {
                recorded: false,
                bonus_awarded: false,
            };
        };

        let record = AttemptRecord::new(&user.id, quiz_id, outcome.score, outcome.is_passed);
        let recorded = match self.attempts.insert(record).await {
            Ok(_) => true,
            Err(err) => {
                log::error!(
                    "failed to persist attempt for quiz {} by user {}: {}",
                    quiz_id,
                    user.id,
                    err
                );
                false
            }
        };

        let mut bonus_awarded = false;
        if recorded && outcome.is_passed {
            match self
                .profiles
                .add_bonus_points(&user.id, PASS_BONUS_POINTS)
                .await
            {
                Ok(()) => bonus_awarded = true,
                Err(err) => {
                    log::error!("failed to award bonus points to user {}: {}", user.id, err);
                }
            }
        }

        AttemptReceipt {
            recorded,
            bonus_awarded,
        }
    }

    pub async fn get_user_attempts(
        &self,
        user_id: &str,
        quiz_id: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<AttemptRecord>, i64)> {
        self.attempts
            .get_user_attempts(user_id, quiz_id, offset, limit)
            .await
    }
}
