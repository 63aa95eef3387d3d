use axum::{extract::State, Json};
use chrono::Utc;

use fm_common::api::match_request::{MatchRequest, RankRequest};
use fm_common::api::match_response::MatchResponse;

use crate::error::ApiError;
use crate::SharedState;

const DEFAULT_RANK_LIMIT: usize = 50;

/// Scores one user/job pair the caller already fetched.
pub async fn score_match(
    State(state): State<SharedState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, ApiError> {
    let score = state.engine.score(&request.user, &request.job);

    Ok(Json(MatchResponse::from_score(
        request.job.id,
        &score,
        Utc::now(),
        &state.match_config,
    )))
}

/// Ranks a batch of jobs for one user, best-first.
pub async fn rank_matches(
    State(state): State<SharedState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<Vec<MatchResponse>>, ApiError> {
    if request.jobs.is_empty() {
        return Err(ApiError::BadRequest("jobs must not be empty".into()));
    }
    if request.jobs.len() > state.match_config.max_rank_jobs {
        return Err(ApiError::BadRequest(format!(
            "too many jobs in one request: {} > {}",
            request.jobs.len(),
            state.match_config.max_rank_jobs
        )));
    }

    let ranked = if request.recommended_only {
        state.engine.recommended_jobs(&request.user, &request.jobs)
    } else {
        state.engine.rank_jobs(&request.user, &request.jobs)
    };

    let limit = request
        .limit
        .unwrap_or(DEFAULT_RANK_LIMIT)
        .clamp(1, state.match_config.max_rank_jobs);
    let matched_at = Utc::now();

    let responses = ranked
        .iter()
        .take(limit)
        .map(|job| MatchResponse::from_ranked(job, matched_at, &state.match_config))
        .collect();

    Ok(Json(responses))
}
