use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::domain::{attempt::AttemptRecord, profile::Profile},
    models::dto::response::LeaderboardEntry,
    repositories::{AttemptRepository, ProfileRepository},
};

/// Recomputes the ranking from scratch on every call: all attempt records,
/// joined in memory with their owners' profiles. Nothing is persisted.
pub struct LeaderboardService {
    attempts: Arc<dyn AttemptRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl LeaderboardService {
    pub fn new(attempts: Arc<dyn AttemptRepository>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { attempts, profiles }
    }

    pub async fn compute(&self) -> AppResult<Vec<LeaderboardEntry>> {
        let attempts = self.attempts.find_all().await?;

        let mut user_ids: Vec<String> = attempts.iter().map(|a| a.user_id.clone()).collect();
        user_ids.sort();
        user_ids.dedup();

        let profiles = self.profiles.find_by_ids(&user_ids).await?;
        let profile_map: HashMap<&str, &Profile> =
            profiles.iter().map(|p| (p.id.as_str(), p)).collect();

        Ok(Self::aggregate(&attempts, &profile_map))
    }

    /// Fold attempts into per-user totals, derive the average, rank.
    /// Attempts whose profile join is missing contribute to no one.
    /// Bonus points are a point-in-time profile snapshot, overwritten on
    /// each record rather than summed, so attempt order cannot change the
    /// final value within one fetch.
    fn aggregate(
        attempts: &[AttemptRecord],
        profile_map: &HashMap<&str, &Profile>,
    ) -> Vec<LeaderboardEntry> {
        let mut totals: HashMap<String, LeaderboardEntry> = HashMap::new();

        for attempt in attempts {
            let Some(profile) = profile_map.get(attempt.user_id.as_str()) else {
                continue;
            };

            let entry = totals
                .entry(attempt.user_id.clone())
                .or_insert_with(|| LeaderboardEntry {
                    user_id: attempt.user_id.clone(),
                    display_name: profile.display_name(),
                    avatar_url: profile.avatar_url.clone(),
                    total_score: 0,
                    total_attempts: 0,
                    total_passed_quizzes: 0,
                    average_score: 0.0,
                    current_bonus_points: 0,
                });

            entry.total_score += attempt.score_obtained as i64;
            entry.total_attempts += 1;
            if attempt.is_passed {
                entry.total_passed_quizzes += 1;
            }
            entry.current_bonus_points = profile.bonus_points;
        }

        let mut entries: Vec<LeaderboardEntry> = totals.into_values().collect();

        for entry in &mut entries {
            entry.average_score = if entry.total_attempts == 0 {
                0.0
            } else {
                round_two_decimals(entry.total_score as f64 / entry.total_attempts as f64)
            };
        }

        entries.sort_by(|a, b| {
            b.current_bonus_points
                .cmp(&a.current_bonus_points)
                .then_with(|| {
                    b.average_score
                        .partial_cmp(&a.average_score)
                        .unwrap_or(Ordering::Equal)
                })
                // exact ties settle on user id so the order is deterministic
                .then_with(|| a.user_id.cmp(&b.user_id))
        });

        entries
    }
}

fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
