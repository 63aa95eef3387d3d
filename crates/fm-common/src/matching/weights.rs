//! Policy constants for both scorers.
//!
//! Every weight, cap, and threshold in the scoring rules lives here under a
//! name so it can be tested and tuned independently. None of these values is
//! derived; they are product policy.

/// Per-factor caps of the six-way match breakdown. The caps double as the
/// factor weights: each factor is computed directly on its cap scale and the
/// six results are summed.
#[derive(Debug, Clone, Copy)]
pub struct BreakdownCaps {
    pub skills: f64,
    pub budget: f64,
    pub client_quality: f64,
    pub job_type: f64,
    pub location: f64,
    pub risk: f64,
}

impl BreakdownCaps {
    pub fn sum(&self) -> f64 {
        self.skills + self.budget + self.client_quality + self.job_type + self.location + self.risk
    }
}

pub const MATCH_CAPS: BreakdownCaps = BreakdownCaps {
    skills: 30.0,
    budget: 20.0,
    client_quality: 20.0,
    job_type: 10.0,
    location: 10.0,
    risk: 10.0,
};

/// Weighted components of the AI fit score. The weights sum to 0.9 on
/// purpose: the remaining headroom is taken by the unweighted risk and
/// client-quality adjustments.
#[derive(Debug, Clone, Copy)]
pub struct FitWeights {
    pub skill: f64,
    pub trust: f64,
    pub budget: f64,
}

impl FitWeights {
    pub fn sum(&self) -> f64 {
        self.skill + self.trust + self.budget
    }
}

pub const FIT_WEIGHTS: FitWeights = FitWeights {
    skill: 0.4,
    trust: 0.3,
    budget: 0.2,
};

// Match-scorer risk factor: deductions from the 10-point allowance, floored
// at zero.
pub const RISK_PENALTY_UNPAID_TEST: f64 = 3.0;
pub const RISK_PENALTY_SCOPE_CREEP: f64 = 3.0;
pub const RISK_PENALTY_EXTREME_NDA: f64 = 2.0;
pub const RISK_PENALTY_LOW_RATING: f64 = 3.0;
pub const RISK_PENALTY_LOW_HIRE_RATE: f64 = 2.0;
pub const RISK_PENALTY_UNVERIFIED: f64 = 2.0;

/// Client ratings below this are treated as a risk signal.
pub const LOW_RATING_CUTOFF: f64 = 3.0;
/// Hire rates (percent) below this are treated as a risk signal.
pub const LOW_HIRE_RATE_CUTOFF: f64 = 20.0;

// Fit-scorer risk deductions, applied straight to the weighted total.
pub const FIT_PENALTY_SCOPE_CREEP: f64 = 10.0;
pub const FIT_PENALTY_EXTREME_NDA: f64 = 10.0;
pub const FIT_PENALTY_UNPAID_TEST: f64 = 15.0;

// Fit-scorer client-quality bonus.
pub const TOP_CLIENT_RATING: f64 = 4.5;
pub const GOOD_CLIENT_RATING: f64 = 4.0;
pub const FIT_BONUS_TOP_CLIENT: f64 = 10.0;
pub const FIT_BONUS_GOOD_CLIENT: f64 = 5.0;

/// Jobs scoring at or above this total are surfaced as "recommended".
pub const RECOMMENDED_THRESHOLD: f64 = 60.0;

/// Hard cap on fit reasoning strings; warnings fill the cap first.
pub const FIT_REASONING_LIMIT: usize = 3;

/// Flat baseline for converting a fixed budget into an effective hourly rate.
pub const FIXED_BUDGET_BASELINE_HOURS: f64 = 40.0;

/// A declared rate up to this fraction above the job's hourly maximum still
/// counts as negotiable.
pub const NEGOTIABLE_RATE_MARGIN: f64 = 0.2;

/// Effective hourly rates at or above this fraction of the declared rate are
/// an acceptable fixed-budget fit.
pub const FIXED_BUDGET_RATE_FLOOR: f64 = 0.8;

// Client-quality factor: per-flag deduction and its cap. Counts every tag on
// the posting, recognized vocabulary or not.
pub const CLIENT_QUALITY_FLAG_PENALTY: f64 = 2.0;
pub const CLIENT_QUALITY_FLAG_PENALTY_CAP: f64 = 5.0;

// Overqualification penalty tiers (skill-list size over required-skill
// count).
pub const OVERQUALIFIED_PENALTY_FREE_RATIO: f64 = 2.0;
pub const OVERQUALIFIED_LIGHT_RATIO: f64 = 3.0;
pub const OVERQUALIFIED_LIGHT_PENALTY: f64 = 5.0;
pub const OVERQUALIFIED_HEAVY_PENALTY: f64 = 10.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_caps_sum_to_one_hundred() {
        assert!((MATCH_CAPS.sum() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn fit_weights_leave_adjustment_headroom() {
        assert!((FIT_WEIGHTS.sum() - 0.9).abs() < 1e-9);
    }

    #[test]
    fn risk_deductions_cannot_exceed_the_risk_allowance_individually() {
        for penalty in [
            RISK_PENALTY_UNPAID_TEST,
            RISK_PENALTY_SCOPE_CREEP,
            RISK_PENALTY_EXTREME_NDA,
            RISK_PENALTY_LOW_RATING,
            RISK_PENALTY_LOW_HIRE_RATE,
            RISK_PENALTY_UNVERIFIED,
        ] {
            assert!(penalty > 0.0 && penalty <= MATCH_CAPS.risk);
        }
    }
}
