use axum::{extract::State, Json};
use chrono::Utc;

use fm_common::api::match_response::FitResponse;
use fm_common::matching::{score_ai_fit, FitInput};

use crate::error::ApiError;
use crate::SharedState;

/// Scores how well a freelancer fits a job. Shape validation lives here at
/// the boundary; the scorer itself is total over well-formed inputs.
pub async fn score_fit(
    State(_state): State<SharedState>,
    Json(input): Json<FitInput>,
) -> Result<Json<FitResponse>, ApiError> {
    if !(0.0..=1.0).contains(&input.trust) {
        return Err(ApiError::BadRequest(
            "trust must be within 0.0..=1.0".into(),
        ));
    }
    if !(0.0..=5.0).contains(&input.client_rating) {
        return Err(ApiError::BadRequest(
            "client_rating must be within 0.0..=5.0".into(),
        ));
    }

    let score = score_ai_fit(&input);

    Ok(Json(FitResponse::from_score(
        input.freelancer_id,
        &score,
        Utc::now(),
    )))
}
