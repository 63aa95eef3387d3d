use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::fit::AiFitScore;
use crate::matching::pipeline::RankedJob;
use crate::matching::scoring::{MatchBreakdown, MatchScore};
use crate::matching::weights::RECOMMENDED_THRESHOLD;
use crate::run_id;

/// Match result for API consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub job_id: Option<i64>,

    // === scores ===
    /// Composite score, 0-100.
    pub total_score: i32,
    pub breakdown: BreakdownDto,
    /// `total_score` cleared the configured recommendation threshold.
    pub recommended: bool,

    // === explanations ===
    pub reasons: Vec<String>,
    pub warnings: Vec<String>,

    // === metadata ===
    pub engine_version: String,
    pub match_run_id: String,
    pub matched_at: DateTime<Utc>,
}

impl MatchResponse {
    pub fn from_score(
        job_id: Option<i64>,
        score: &MatchScore,
        matched_at: DateTime<Utc>,
        config: &MatchApiConfig,
    ) -> Self {
        Self {
            job_id,
            total_score: score.total,
            breakdown: BreakdownDto::from(&score.breakdown),
            recommended: f64::from(score.total) >= config.recommended_threshold,
            reasons: score.reasons.clone(),
            warnings: score.warnings.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            match_run_id: run_id::get().to_string(),
            matched_at,
        }
    }

    pub fn from_ranked(
        ranked: &RankedJob,
        matched_at: DateTime<Utc>,
        config: &MatchApiConfig,
    ) -> Self {
        Self::from_score(ranked.job.id, &ranked.score, matched_at, config)
    }
}

/// Per-factor sub-scores on their documented scales.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BreakdownDto {
    /// 0-30
    pub skills_match: f64,
    /// 0-20
    pub budget_fit: f64,
    /// 0-20
    pub client_quality: f64,
    /// 0-10
    pub job_type_preference: f64,
    /// 0-10
    pub location_match: f64,
    /// 0-10
    pub risk_assessment: f64,
}

impl From<&MatchBreakdown> for BreakdownDto {
    fn from(value: &MatchBreakdown) -> Self {
        Self {
            skills_match: value.skills_match,
            budget_fit: value.budget_fit,
            client_quality: value.client_quality,
            job_type_preference: value.job_type_preference,
            location_match: value.location_match,
            risk_assessment: value.risk_assessment,
        }
    }
}

/// Fit result for API consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitResponse {
    pub freelancer_id: i64,
    pub total_score: i32,
    pub skill_score: i32,
    pub trust_score: i32,
    pub budget_alignment: i32,
    pub reasoning: Vec<String>,
    pub engine_version: String,
    pub match_run_id: String,
    pub matched_at: DateTime<Utc>,
}

impl FitResponse {
    pub fn from_score(freelancer_id: i64, score: &AiFitScore, matched_at: DateTime<Utc>) -> Self {
        Self {
            freelancer_id,
            total_score: score.total,
            skill_score: score.skill_score,
            trust_score: score.trust_score,
            budget_alignment: score.budget_alignment,
            reasoning: score.reasoning.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            match_run_id: run_id::get().to_string(),
            matched_at,
        }
    }
}

/// API-facing knobs, environment-driven. The scoring policy itself lives in
/// `matching::weights`; these only shape what the service returns.
#[derive(Debug, Clone)]
pub struct MatchApiConfig {
    /// Threshold for the `recommended` flag (default: 60).
    pub recommended_threshold: f64,
    /// Upper bound on jobs accepted by one rank request.
    pub max_rank_jobs: usize,
}

impl Default for MatchApiConfig {
    fn default() -> Self {
        Self {
            recommended_threshold: RECOMMENDED_THRESHOLD,
            max_rank_jobs: 200,
        }
    }
}

impl MatchApiConfig {
    /// Reads overrides from `FM_RECOMMENDED_THRESHOLD` and `FM_MAX_RANK_JOBS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            recommended_threshold: std::env::var("FM_RECOMMENDED_THRESHOLD")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.recommended_threshold),
            max_rank_jobs: std::env::var("FM_MAX_RANK_JOBS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_rank_jobs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::scoring::score_job_match;
    use crate::{JobPosting, Skill, SkillLevel, UserProfile};

    fn scored_pair() -> MatchScore {
        let user = UserProfile {
            skills: vec!["react".into(), "node".into()],
            hourly_rate_cents: Some(5000),
            prefer_remote: Some(true),
            ..UserProfile::default()
        };
        let job = JobPosting {
            job_type: "hourly".into(),
            required_skills: vec![
                Skill::new("react", SkillLevel::Intermediate),
                Skill::new("node", SkillLevel::Intermediate),
            ],
            hourly_rate_min_cents: Some(4500),
            hourly_rate_max_cents: Some(6000),
            client_verified: true,
            client_rating: Some(4.8),
            is_remote: true,
            ..JobPosting::default()
        };

        score_job_match(&user, &job)
    }

    #[test]
    fn builds_response_with_metadata() {
        let score = scored_pair();
        let matched_at = Utc::now();
        let config = MatchApiConfig::default();

        let response = MatchResponse::from_score(Some(42), &score, matched_at, &config);

        assert_eq!(response.job_id, Some(42));
        assert_eq!(response.total_score, score.total);
        assert!(response.recommended);
        assert_eq!(response.match_run_id, run_id::get());
        assert_eq!(response.matched_at, matched_at);
        assert_eq!(response.breakdown.skills_match, score.breakdown.skills_match);
    }

    #[test]
    fn recommended_flag_respects_the_threshold() {
        let score = scored_pair();
        let config = MatchApiConfig {
            recommended_threshold: f64::from(score.total) + 1.0,
            ..MatchApiConfig::default()
        };

        let response = MatchResponse::from_score(None, &score, Utc::now(), &config);

        assert!(!response.recommended);
    }

    #[test]
    fn match_response_serializes_round_trip() {
        let response =
            MatchResponse::from_score(Some(1), &scored_pair(), Utc::now(), &MatchApiConfig::default());

        let json = serde_json::to_string(&response).unwrap();
        let parsed: MatchResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.total_score, response.total_score);
        assert_eq!(parsed.reasons, response.reasons);
    }
}
