pub mod api;
pub mod logging;
pub mod matching;
pub mod run_id;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Ordinal proficiency attached to a named skill (beginner=1 .. expert=4).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Ordinal rank used for level-compatibility arithmetic.
    pub fn rank(self) -> i32 {
        match self {
            SkillLevel::Beginner => 1,
            SkillLevel::Intermediate => 2,
            SkillLevel::Advanced => 3,
            SkillLevel::Expert => 4,
        }
    }
}

impl Default for SkillLevel {
    /// Uniform default for stores that do not track per-skill proficiency.
    fn default() -> Self {
        SkillLevel::Intermediate
    }
}

/// A named skill with a proficiency level. Names compare case-insensitively
/// after trimming; there is no fuzzy matching or aliasing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: SkillLevel) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

/// Recognized risk-flag vocabulary on job postings.
///
/// Anything outside this vocabulary parses to `None` and is ignored by the
/// explicit penalty tables. Unrecognized tags still count toward the generic
/// flag-count deduction in the client-quality factor; the asymmetry is
/// deliberate and mirrors how postings are flagged upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RiskFlag {
    ScopeCreep,
    ExtremeNda,
    UnpaidTest,
}

impl RiskFlag {
    /// Parses a tag from the open-ended string vocabulary.
    pub fn parse(tag: &str) -> Option<Self> {
        tag.trim().parse().ok()
    }

    /// Whether this flag appears anywhere in a posting's tag list.
    pub fn present_in(self, tags: &[String]) -> bool {
        tags.iter().filter_map(|tag| Self::parse(tag)).any(|flag| flag == self)
    }
}

/// A freelancer profile as the matching engine sees it: a plain value struct
/// shaped by the caller from its user record. Most stores keep skills as a
/// flat name list; `leveled_skills` is the explicit capability flag for the
/// ones that track proficiency per skill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Option<i64>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub leveled_skills: Option<Vec<Skill>>,
    /// Declared hourly rate in minor currency units.
    pub hourly_rate_cents: Option<u32>,
    pub preferred_job_types: Option<Vec<String>>,
    pub preferred_industries: Option<Vec<String>>,
    pub location: Option<String>,
    pub timezone: Option<String>,
    pub prefer_remote: Option<bool>,
    pub rating: Option<f64>,
    pub success_rate: Option<f64>,
    pub completed_projects: Option<u32>,
}

/// A job posting as the matching engine sees it. All money fields are integer
/// minor currency units; converting from display units is the boundary's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub job_type: String,
    pub industry: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<Skill>,
    pub budget_min_cents: Option<u64>,
    pub budget_max_cents: Option<u64>,
    pub hourly_rate_min_cents: Option<u32>,
    pub hourly_rate_max_cents: Option<u32>,
    /// Client feedback rating, 0-5.
    pub client_rating: Option<f64>,
    /// Historical hire rate, 0-100 percent.
    pub client_hire_rate: Option<f64>,
    #[serde(default)]
    pub client_verified: bool,
    #[serde(default)]
    pub is_remote: bool,
    pub location: Option<String>,
    pub timezone: Option<String>,
    #[serde(default)]
    pub risk_flags: Vec<String>,
}

impl JobPosting {
    /// Whether the posting carries a given recognized risk flag.
    pub fn has_risk_flag(&self, flag: RiskFlag) -> bool {
        flag.present_in(&self.risk_flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_levels_are_ordered() {
        assert!(SkillLevel::Beginner < SkillLevel::Intermediate);
        assert!(SkillLevel::Advanced < SkillLevel::Expert);
        assert_eq!(SkillLevel::Expert.rank() - SkillLevel::Beginner.rank(), 3);
    }

    #[test]
    fn skill_level_parses_case_insensitively() {
        assert_eq!("expert".parse::<SkillLevel>().unwrap(), SkillLevel::Expert);
        assert_eq!("Beginner".parse::<SkillLevel>().unwrap(), SkillLevel::Beginner);
    }

    #[test]
    fn missing_skill_level_defaults_to_intermediate() {
        let skill: Skill = serde_json::from_str(r#"{"name": "react"}"#).unwrap();
        assert_eq!(skill.level, SkillLevel::Intermediate);
    }

    #[test]
    fn recognizes_only_the_fixed_risk_vocabulary() {
        assert_eq!(RiskFlag::parse("scope-creep"), Some(RiskFlag::ScopeCreep));
        assert_eq!(RiskFlag::parse("extreme-nda"), Some(RiskFlag::ExtremeNda));
        assert_eq!(RiskFlag::parse("unpaid-test"), Some(RiskFlag::UnpaidTest));
        assert_eq!(RiskFlag::parse("haunted-codebase"), None);
    }

    #[test]
    fn risk_flag_lookup_ignores_unrecognized_tags() {
        let job = JobPosting {
            risk_flags: vec!["haunted-codebase".into(), "unpaid-test".into()],
            ..JobPosting::default()
        };

        assert!(job.has_risk_flag(RiskFlag::UnpaidTest));
        assert!(!job.has_risk_flag(RiskFlag::ScopeCreep));
    }

    #[test]
    fn job_posting_deserializes_with_minimal_fields() {
        let job: JobPosting = serde_json::from_str(
            r#"{"title": "Build a dashboard", "job_type": "fixed-price"}"#,
        )
        .unwrap();

        assert_eq!(job.title, "Build a dashboard");
        assert!(job.required_skills.is_empty());
        assert!(!job.client_verified);
    }
}
