use crate::{JobPosting, UserProfile};

use super::scoring::{MatchScore, MatchScorer, MatchingConfig};

/// A job paired with its match score, as produced by the ranking engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedJob {
    pub job: JobPosting,
    pub score: MatchScore,
}

#[derive(Debug, Clone)]
pub struct MatchingEngine {
    scorer: MatchScorer,
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new(MatchingConfig::default())
    }
}

impl MatchingEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self {
            scorer: MatchScorer::new(config),
        }
    }

    pub fn config(&self) -> &MatchingConfig {
        self.scorer.config()
    }

    /// Scores a single pair.
    pub fn score(&self, user: &UserProfile, job: &JobPosting) -> MatchScore {
        self.scorer.score(user, job)
    }

    /// Scores every job for the user and returns them best-first. The sort
    /// is stable, so equal totals keep the caller's order; that is the whole
    /// tie-break policy.
    pub fn rank_jobs(&self, user: &UserProfile, jobs: &[JobPosting]) -> Vec<RankedJob> {
        let mut ranked: Vec<RankedJob> = jobs
            .iter()
            .map(|job| RankedJob {
                job: job.clone(),
                score: self.scorer.score(user, job),
            })
            .collect();

        ranked.sort_by(|a, b| b.score.total.cmp(&a.score.total));
        ranked
    }

    /// The ranked jobs at or above the recommended threshold, in ranked
    /// order. The threshold is a caller-facing policy knob, not a property
    /// of the scores themselves.
    pub fn recommended_jobs(&self, user: &UserProfile, jobs: &[JobPosting]) -> Vec<RankedJob> {
        let threshold = self.scorer.config().recommended_threshold;

        self.rank_jobs(user, jobs)
            .into_iter()
            .filter(|ranked| f64::from(ranked.score.total) >= threshold)
            .collect()
    }
}
