use serde::Deserialize;

use crate::{JobPosting, UserProfile};

/// Score one already-fetched user/job pair.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequest {
    pub user: UserProfile,
    pub job: JobPosting,
}

/// Rank a batch of jobs for one user.
#[derive(Debug, Clone, Deserialize)]
pub struct RankRequest {
    pub user: UserProfile,
    pub jobs: Vec<JobPosting>,
    /// Keep only jobs at or above the recommended threshold.
    #[serde(default)]
    pub recommended_only: bool,
    /// Maximum number of results; the server clamps it to its own ceiling.
    #[serde(default)]
    pub limit: Option<usize>,
}
