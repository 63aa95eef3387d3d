//! AI fit scoring: a three-factor weighted model with additive risk and
//! client-quality adjustments, plus a capped reasoning list where warnings
//! always crowd out positives.

use serde::{Deserialize, Serialize};

use crate::{RiskFlag, Skill};

use super::skills::score_skill_compatibility;
use super::weights::{
    FIT_BONUS_GOOD_CLIENT, FIT_BONUS_TOP_CLIENT, FIT_PENALTY_EXTREME_NDA, FIT_PENALTY_SCOPE_CREEP,
    FIT_PENALTY_UNPAID_TEST, FIT_REASONING_LIMIT, FIT_WEIGHTS, GOOD_CLIENT_RATING,
    TOP_CLIENT_RATING,
};

fn default_client_rating() -> f64 {
    3.0
}

/// Inputs for one fit-score call. The job budget, like every money field in
/// this crate, is integer minor currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitInput {
    pub freelancer_id: i64,
    /// Freelancer skills; stores without per-skill levels default them
    /// uniformly via `SkillLevel::default`.
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Experience proxy (years or completed-project count, caller's choice).
    #[serde(default)]
    pub experience: f64,
    /// Platform trust score, 0.0-1.0.
    #[serde(default)]
    pub trust: f64,
    pub job_title: String,
    #[serde(default)]
    pub required_skills: Vec<Skill>,
    pub job_description: Option<String>,
    pub job_category: Option<String>,
    pub job_industry: Option<String>,
    pub job_budget_cents: Option<u64>,
    #[serde(default = "default_client_rating")]
    pub client_rating: f64,
    #[serde(default)]
    pub risk_flags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiFitScore {
    /// Weighted factors plus adjustments, rounded and clamped to [0,100].
    pub total: i32,
    pub skill_score: i32,
    pub trust_score: i32,
    pub budget_alignment: i32,
    /// At most three strings; risk warnings take priority over positives.
    pub reasoning: Vec<String>,
}

pub fn score_ai_fit(input: &FitInput) -> AiFitScore {
    let skill_score = score_skill_compatibility(&input.skills, &input.required_skills);
    let trust_score = (input.trust * 100.0).clamp(0.0, 100.0);

    let budget_alignment = match input.job_budget_cents {
        // Nothing on record to align against.
        None => 50.0,
        // A posted budget is read as an experience expectation rather than a
        // rate comparison: bigger budgets go to freelancers with more mileage.
        Some(_) => (input.experience * 2.0 + 40.0).min(100.0),
    };

    let mut adjustment = 0.0;
    let mut warnings = Vec::new();

    if RiskFlag::ScopeCreep.present_in(&input.risk_flags) {
        adjustment -= FIT_PENALTY_SCOPE_CREEP;
        warnings.push("Client history suggests scope-creep risk".to_string());
    }
    if RiskFlag::ExtremeNda.present_in(&input.risk_flags) {
        adjustment -= FIT_PENALTY_EXTREME_NDA;
        warnings.push("Contract carries unusually restrictive NDA terms".to_string());
    }
    if RiskFlag::UnpaidTest.present_in(&input.risk_flags) {
        adjustment -= FIT_PENALTY_UNPAID_TEST;
        warnings.push("Job asks for unpaid test work".to_string());
    }

    if input.client_rating >= TOP_CLIENT_RATING {
        adjustment += FIT_BONUS_TOP_CLIENT;
    } else if input.client_rating >= GOOD_CLIENT_RATING {
        adjustment += FIT_BONUS_GOOD_CLIENT;
    }

    let weighted = skill_score * FIT_WEIGHTS.skill
        + trust_score * FIT_WEIGHTS.trust
        + budget_alignment * FIT_WEIGHTS.budget
        + adjustment;
    let total = (weighted.round() as i32).clamp(0, 100);

    let reasoning = select_reasoning(
        positive_reasons(skill_score, trust_score, input.client_rating),
        warnings,
    );

    AiFitScore {
        total,
        skill_score: skill_score.round() as i32,
        trust_score: trust_score.round() as i32,
        budget_alignment: budget_alignment.round() as i32,
        reasoning,
    }
}

/// One tiered comment per category: skill, trust, client rating.
fn positive_reasons(skill_score: f64, trust_score: f64, client_rating: f64) -> Vec<String> {
    let skill = if skill_score >= 80.0 {
        "Skills line up closely with the job requirements"
    } else if skill_score >= 50.0 {
        "Solid overlap with the required skills"
    } else {
        "Some of the required skills are covered"
    };

    let trust = if trust_score >= 80.0 {
        "Long, reliable track record on the platform"
    } else if trust_score >= 50.0 {
        "Established track record on the platform"
    } else {
        "Still building a track record on the platform"
    };

    let client = if client_rating >= TOP_CLIENT_RATING {
        "Client is highly rated by past freelancers"
    } else if client_rating >= 3.5 {
        "Client reviews are generally positive"
    } else {
        "Client reviews are mixed"
    };

    vec![skill.into(), trust.into(), client.into()]
}

/// Warnings always survive in full; positives fill whatever room is left
/// under the cap.
fn select_reasoning(positives: Vec<String>, warnings: Vec<String>) -> Vec<String> {
    let room = FIT_REASONING_LIMIT.saturating_sub(warnings.len());
    let mut reasoning: Vec<String> = positives.into_iter().take(room).collect();
    reasoning.extend(warnings.into_iter().take(FIT_REASONING_LIMIT));
    reasoning
}
