use crate::{JobPosting, RiskFlag, UserProfile};

use super::skills::{find_skill, level_compatibility, name_match_count};
use super::weights::{
    BreakdownCaps, CLIENT_QUALITY_FLAG_PENALTY, CLIENT_QUALITY_FLAG_PENALTY_CAP,
    FIXED_BUDGET_BASELINE_HOURS, FIXED_BUDGET_RATE_FLOOR, LOW_HIRE_RATE_CUTOFF, LOW_RATING_CUTOFF,
    MATCH_CAPS, NEGOTIABLE_RATE_MARGIN, RECOMMENDED_THRESHOLD, RISK_PENALTY_EXTREME_NDA,
    RISK_PENALTY_LOW_HIRE_RATE, RISK_PENALTY_LOW_RATING, RISK_PENALTY_SCOPE_CREEP,
    RISK_PENALTY_UNPAID_TEST, RISK_PENALTY_UNVERIFIED,
};

#[derive(Debug, Clone)]
pub struct MatchingConfig {
    pub caps: BreakdownCaps,
    pub recommended_threshold: f64,
    pub baseline_hours: f64,
    pub negotiable_rate_margin: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            caps: MATCH_CAPS,
            recommended_threshold: env_recommended_threshold(),
            baseline_hours: FIXED_BUDGET_BASELINE_HOURS,
            negotiable_rate_margin: NEGOTIABLE_RATE_MARGIN,
        }
    }
}

fn env_recommended_threshold() -> f64 {
    std::env::var("FM_RECOMMENDED_THRESHOLD")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(RECOMMENDED_THRESHOLD)
}

#[derive(Debug, Clone)]
struct FactorScore {
    score: f64,
    reasons: Vec<String>,
}

#[derive(Debug, Clone)]
struct RiskFactor {
    score: f64,
    warnings: Vec<String>,
}

/// Per-factor sub-scores, each capped at its share of the 100-point total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchBreakdown {
    pub skills_match: f64,
    pub budget_fit: f64,
    pub client_quality: f64,
    pub job_type_preference: f64,
    pub location_match: f64,
    pub risk_assessment: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchScore {
    /// Rounded sum of the breakdown, clamped to [0,100].
    pub total: i32,
    pub breakdown: MatchBreakdown,
    /// Positive-factor explanations in fixed factor order.
    pub reasons: Vec<String>,
    /// Risk-factor explanations, one per triggered condition.
    pub warnings: Vec<String>,
}

/// Scores one user/job pair with the default configuration.
pub fn score_job_match(user: &UserProfile, job: &JobPosting) -> MatchScore {
    MatchScorer::default().score(user, job)
}

#[derive(Debug, Clone)]
pub struct MatchScorer {
    config: MatchingConfig,
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new(MatchingConfig::default())
    }
}

impl MatchScorer {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Six independent factors, summed and clamped. Every branch has a
    /// defined default; absent optional fields degrade to a neutral score.
    pub fn score(&self, user: &UserProfile, job: &JobPosting) -> MatchScore {
        let skills = self.score_skills(user, job);
        let budget = self.score_budget(user, job);
        let client = self.score_client_quality(job);
        let job_type = self.score_job_type(user, job);
        let location = self.score_location(user, job);
        let risk = self.score_risk(job);

        let breakdown = MatchBreakdown {
            skills_match: skills.score,
            budget_fit: budget.score,
            client_quality: client.score,
            job_type_preference: job_type.score,
            location_match: location.score,
            risk_assessment: risk.score,
        };

        let sum = skills.score
            + budget.score
            + client.score
            + job_type.score
            + location.score
            + risk.score;
        let total = (sum.round() as i32).clamp(0, 100);

        let mut reasons = Vec::new();
        for factor in [skills, budget, client, job_type, location] {
            reasons.extend(factor.reasons);
        }

        MatchScore {
            total,
            breakdown,
            reasons,
            warnings: risk.warnings,
        }
    }

    /// Skills factor (0-30). Level-aware when the profile carries leveled
    /// skills, name-only coverage otherwise.
    fn score_skills(&self, user: &UserProfile, job: &JobPosting) -> FactorScore {
        let required = &job.required_skills;
        if required.is_empty() {
            return FactorScore {
                score: self.config.caps.skills / 2.0,
                reasons: vec!["No specific skills required".into()],
            };
        }

        let (matched, compatibility_sum) = match user.leveled_skills.as_deref() {
            Some(leveled) => required.iter().fold((0usize, 0.0f64), |(count, sum), req| {
                match find_skill(leveled, &req.name) {
                    Some(owned) => (count + 1, sum + level_compatibility(owned.level, req.level)),
                    None => (count, sum),
                }
            }),
            None => {
                let count = name_match_count(&user.skills, required);
                (count, count as f64)
            }
        };

        let coverage = matched as f64 / required.len() as f64;
        let score = (compatibility_sum / required.len() as f64 * self.config.caps.skills).round();

        let mut reasons = Vec::new();
        if coverage >= 0.8 {
            reasons.push(format!(
                "Strong skills match ({matched}/{} required skills)",
                required.len()
            ));
        } else if coverage >= 0.5 {
            reasons.push(format!(
                "Good skills match ({matched}/{} required skills)",
                required.len()
            ));
        } else if coverage > 0.0 {
            reasons.push(format!(
                "Partial skills match ({matched}/{} required skills)",
                required.len()
            ));
        }

        FactorScore { score, reasons }
    }

    /// Budget factor (0-20) against the user's declared hourly rate.
    fn score_budget(&self, user: &UserProfile, job: &JobPosting) -> FactorScore {
        let Some(rate) = user.hourly_rate_cents else {
            return FactorScore {
                score: self.config.caps.budget / 2.0,
                reasons: Vec::new(),
            };
        };
        let rate = f64::from(rate);

        if let (Some(min), Some(max)) = (job.hourly_rate_min_cents, job.hourly_rate_max_cents) {
            let (min, max) = (f64::from(min), f64::from(max));

            return if rate >= min && rate <= max {
                FactorScore {
                    score: 20.0,
                    reasons: vec!["Budget is a perfect fit for your rate".into()],
                }
            } else if rate < min {
                FactorScore {
                    score: 18.0,
                    reasons: vec!["Job pays above your usual rate".into()],
                }
            } else if rate <= max * (1.0 + self.config.negotiable_rate_margin) {
                FactorScore {
                    score: 12.0,
                    reasons: vec!["Budget slightly below your rate, likely negotiable".into()],
                }
            } else {
                // Significantly below the declared rate.
                FactorScore {
                    score: 5.0,
                    reasons: Vec::new(),
                }
            };
        }

        if let Some(budget) = job.budget_max_cents.or(job.budget_min_cents) {
            let effective_hourly = budget as f64 / self.config.baseline_hours;
            return if effective_hourly >= rate * FIXED_BUDGET_RATE_FLOOR {
                FactorScore {
                    score: 15.0,
                    reasons: vec!["Fixed budget in line with your rate".into()],
                }
            } else {
                FactorScore {
                    score: 8.0,
                    reasons: Vec::new(),
                }
            };
        }

        FactorScore {
            score: self.config.caps.budget / 2.0,
            reasons: Vec::new(),
        }
    }

    /// Client-quality factor (0-20): additive sub-signals, then a capped
    /// deduction for every flag on the posting (recognized or not).
    fn score_client_quality(&self, job: &JobPosting) -> FactorScore {
        let mut score = 0.0;
        let mut reasons = Vec::new();

        if job.client_verified {
            score += 5.0;
            reasons.push("Payment method verified".into());
        }

        if let Some(rating) = job.client_rating {
            score += (rating / 5.0 * 5.0).clamp(0.0, 5.0);
            if rating >= 4.5 {
                reasons.push(format!("Highly rated client ({rating:.1}/5)"));
            }
        }

        if let Some(hire_rate) = job.client_hire_rate {
            score += (hire_rate / 100.0 * 5.0).clamp(0.0, 5.0);
            if hire_rate >= 50.0 {
                reasons.push(format!("Client hires {hire_rate:.0}% of the time"));
            }
        }

        let flag_penalty = (job.risk_flags.len() as f64 * CLIENT_QUALITY_FLAG_PENALTY)
            .min(CLIENT_QUALITY_FLAG_PENALTY_CAP);
        score -= flag_penalty;

        FactorScore {
            score: score.clamp(0.0, self.config.caps.client_quality),
            reasons,
        }
    }

    /// Job-type preference factor (0-10).
    fn score_job_type(&self, user: &UserProfile, job: &JobPosting) -> FactorScore {
        let Some(preferred) = user
            .preferred_job_types
            .as_deref()
            .filter(|types| !types.is_empty())
        else {
            return FactorScore {
                score: self.config.caps.job_type / 2.0,
                reasons: Vec::new(),
            };
        };

        if preferred.iter().any(|job_type| job_type == &job.job_type) {
            FactorScore {
                score: 10.0,
                reasons: vec!["Matches your preferred job type".into()],
            }
        } else {
            FactorScore {
                score: 3.0,
                reasons: Vec::new(),
            }
        }
    }

    /// Location factor (0-10). Rules are checked in priority order and only
    /// the first hit applies; no stacking.
    fn score_location(&self, user: &UserProfile, job: &JobPosting) -> FactorScore {
        if user.prefer_remote == Some(true) && job.is_remote {
            return FactorScore {
                score: 10.0,
                reasons: vec!["Remote work matches your preference".into()],
            };
        }

        if let (Some(user_tz), Some(job_tz)) = (user.timezone.as_deref(), job.timezone.as_deref()) {
            if !user_tz.trim().is_empty() && user_tz == job_tz {
                return FactorScore {
                    score: 8.0,
                    reasons: vec!["Same timezone as the client".into()],
                };
            }
        }

        if !job.is_remote {
            if let (Some(user_loc), Some(job_loc)) =
                (user.location.as_deref(), job.location.as_deref())
            {
                if !user_loc.trim().is_empty() && user_loc.eq_ignore_ascii_case(job_loc) {
                    return FactorScore {
                        score: 10.0,
                        reasons: vec!["Job is located in your area".into()],
                    };
                }
            }
        }

        FactorScore {
            score: self.config.caps.location / 2.0,
            reasons: Vec::new(),
        }
    }

    /// Risk factor (0-10, penalty-only): starts at the full allowance and
    /// deducts per triggered condition, floored at zero.
    fn score_risk(&self, job: &JobPosting) -> RiskFactor {
        let mut score = self.config.caps.risk;
        let mut warnings = Vec::new();

        if job.has_risk_flag(RiskFlag::UnpaidTest) {
            score -= RISK_PENALTY_UNPAID_TEST;
            warnings.push("Job asks for unpaid test work".into());
        }
        if job.has_risk_flag(RiskFlag::ScopeCreep) {
            score -= RISK_PENALTY_SCOPE_CREEP;
            warnings.push("Client has a history of scope creep".into());
        }
        if job.has_risk_flag(RiskFlag::ExtremeNda) {
            score -= RISK_PENALTY_EXTREME_NDA;
            warnings.push("Unusually restrictive NDA terms".into());
        }

        if let Some(rating) = job.client_rating {
            if rating < LOW_RATING_CUTOFF {
                score -= RISK_PENALTY_LOW_RATING;
                warnings.push(format!("Client rating is low ({rating:.1}/5)"));
            }
        }

        if let Some(hire_rate) = job.client_hire_rate {
            if hire_rate < LOW_HIRE_RATE_CUTOFF {
                score -= RISK_PENALTY_LOW_HIRE_RATE;
                warnings.push(format!("Client rarely hires ({hire_rate:.0}% hire rate)"));
            }
        }

        if !job.client_verified {
            score -= RISK_PENALTY_UNVERIFIED;
            warnings.push("Client payment method is not verified".into());
        }

        RiskFactor {
            score: score.max(0.0),
            warnings,
        }
    }
}
