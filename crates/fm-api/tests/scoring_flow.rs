use axum::{body::Body, http::Request, http::StatusCode, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    fm_api::create_router(fm_api::test_state())
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn reference_user() -> Value {
    json!({
        "skills": ["react", "node"],
        "hourly_rate_cents": 5000,
        "prefer_remote": true
    })
}

fn strong_job(id: i64) -> Value {
    json!({
        "id": id,
        "title": "React dashboard",
        "job_type": "hourly",
        "required_skills": [
            {"name": "react", "level": "intermediate"},
            {"name": "node", "level": "intermediate"}
        ],
        "hourly_rate_min_cents": 4500,
        "hourly_rate_max_cents": 6000,
        "client_verified": true,
        "client_rating": 4.8,
        "is_remote": true
    })
}

fn weak_job(id: i64) -> Value {
    json!({
        "id": id,
        "title": "Embedded firmware",
        "job_type": "hourly",
        "required_skills": [
            {"name": "c", "level": "expert"},
            {"name": "rtos", "level": "advanced"}
        ],
        "hourly_rate_min_cents": 1000,
        "hourly_rate_max_cents": 1500,
        "client_rating": 2.0,
        "risk_flags": ["unpaid-test"]
    })
}

#[tokio::test]
async fn scores_the_reference_pairing_end_to_end() {
    let body = json!({ "user": reference_user(), "job": strong_job(1) });

    let (status, response) = post_json(app(), "/api/match", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["total_score"], 85);
    assert_eq!(response["job_id"], 1);
    assert_eq!(response["recommended"], true);
    assert_eq!(response["breakdown"]["skills_match"], 30.0);
    assert_eq!(response["breakdown"]["budget_fit"], 20.0);
    assert!(response["warnings"].as_array().unwrap().is_empty());
    assert_eq!(response["match_run_id"].as_str().unwrap().len(), 26);
}

#[tokio::test]
async fn rank_returns_jobs_best_first() {
    let body = json!({
        "user": reference_user(),
        "jobs": [weak_job(2), strong_job(1)]
    });

    let (status, response) = post_json(app(), "/api/match/rank", body).await;

    assert_eq!(status, StatusCode::OK);
    let results = response.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["job_id"], 1);
    assert!(results[0]["total_score"].as_i64() > results[1]["total_score"].as_i64());
}

#[tokio::test]
async fn recommended_only_drops_weak_jobs() {
    let body = json!({
        "user": reference_user(),
        "jobs": [weak_job(2), strong_job(1)],
        "recommended_only": true
    });

    let (status, response) = post_json(app(), "/api/match/rank", body).await;

    assert_eq!(status, StatusCode::OK);
    let results = response.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["job_id"], 1);
    assert!(results[0]["total_score"].as_i64().unwrap() >= 60);
}

#[tokio::test]
async fn rank_rejects_empty_job_lists() {
    let body = json!({ "user": reference_user(), "jobs": [] });

    let (status, response) = post_json(app(), "/api/match/rank", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], "bad_request");
}

#[tokio::test]
async fn rank_honors_the_limit_knob() {
    let body = json!({
        "user": reference_user(),
        "jobs": [strong_job(1), strong_job(2), strong_job(3)],
        "limit": 2
    });

    let (status, response) = post_json(app(), "/api/match/rank", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn fit_endpoint_scores_and_caps_reasoning() {
    let body = json!({
        "freelancer_id": 7,
        "skills": [
            {"name": "react", "level": "advanced"},
            {"name": "node", "level": "advanced"}
        ],
        "experience": 10.0,
        "trust": 0.9,
        "job_title": "React dashboard",
        "required_skills": [
            {"name": "react", "level": "advanced"},
            {"name": "node", "level": "advanced"}
        ],
        "job_budget_cents": 500000,
        "client_rating": 4.8,
        "risk_flags": ["scope-creep", "extreme-nda", "unpaid-test"]
    });

    let (status, response) = post_json(app(), "/api/fit", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["freelancer_id"], 7);
    assert_eq!(response["skill_score"], 100);
    assert_eq!(response["trust_score"], 90);

    // All three reasoning slots are taken by risk warnings.
    let reasoning = response["reasoning"].as_array().unwrap();
    assert_eq!(reasoning.len(), 3);
    for entry in reasoning {
        let text = entry.as_str().unwrap();
        assert!(
            text.contains("risk") || text.contains("NDA") || text.contains("unpaid"),
            "expected a warning, got: {text}"
        );
    }
}

#[tokio::test]
async fn fit_endpoint_validates_trust_bounds() {
    let body = json!({
        "freelancer_id": 7,
        "trust": 1.4,
        "job_title": "React dashboard"
    });

    let (status, response) = post_json(app(), "/api/fit", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["message"].as_str().unwrap().contains("trust"));
}
