//! Skill-compatibility primitives shared by the match and fit scorers.

use std::collections::HashSet;

use crate::{Skill, SkillLevel};

use super::weights::{
    OVERQUALIFIED_HEAVY_PENALTY, OVERQUALIFIED_LIGHT_PENALTY, OVERQUALIFIED_LIGHT_RATIO,
    OVERQUALIFIED_PENALTY_FREE_RATIO,
};

/// Canonical form for skill-name comparison: trimmed, lowercased, nothing
/// fuzzier than that.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Finds a skill whose name matches case-insensitively.
pub fn find_skill<'a>(skills: &'a [Skill], name: &str) -> Option<&'a Skill> {
    let wanted = normalize_name(name);
    skills.iter().find(|skill| normalize_name(&skill.name) == wanted)
}

/// Level compatibility in [0,1] for a name-matched pair. The scale punishes
/// missing depth, not surplus depth: a freelancer two or more levels above
/// the requirement still scores near the top.
pub fn level_compatibility(freelancer: SkillLevel, required: SkillLevel) -> f64 {
    match freelancer.rank() - required.rank() {
        0 => 1.0,
        -1 | 1 => 0.7,
        delta if delta > 1 => 0.9,
        _ => 0.4,
    }
}

/// Deduction for skill lists that dwarf the job's requirements. A long tail
/// of unrelated skills dilutes the signal; up to twice the required count
/// stays free.
pub fn overqualification_penalty(freelancer_count: usize, required_count: usize) -> f64 {
    if required_count == 0 {
        return 0.0;
    }

    let ratio = freelancer_count as f64 / required_count as f64;
    if ratio <= OVERQUALIFIED_PENALTY_FREE_RATIO {
        0.0
    } else if ratio <= OVERQUALIFIED_LIGHT_RATIO {
        OVERQUALIFIED_LIGHT_PENALTY
    } else {
        OVERQUALIFIED_HEAVY_PENALTY
    }
}

/// 0-100 compatibility between a freelancer's skills and a job's required
/// skills. An empty list on either side scores 0: there is nothing to match
/// on, which is a neutral fact rather than an error.
pub fn score_skill_compatibility(freelancer_skills: &[Skill], job_skills: &[Skill]) -> f64 {
    if freelancer_skills.is_empty() || job_skills.is_empty() {
        return 0.0;
    }

    let compatibility_sum: f64 = job_skills
        .iter()
        .map(|required| {
            find_skill(freelancer_skills, &required.name)
                .map(|owned| level_compatibility(owned.level, required.level))
                .unwrap_or(0.0)
        })
        .sum();

    let base = compatibility_sum / job_skills.len() as f64 * 100.0;
    let penalty = overqualification_penalty(freelancer_skills.len(), job_skills.len());

    (base - penalty).clamp(0.0, 100.0)
}

/// Fraction of required skills present in a flat name list. Fallback for
/// profiles whose store does not track per-skill levels.
pub fn name_match_count(names: &[String], required: &[Skill]) -> usize {
    let owned: HashSet<String> = names
        .iter()
        .filter(|name| !name.trim().is_empty())
        .map(|name| normalize_name(name))
        .collect();

    required
        .iter()
        .filter(|skill| owned.contains(&normalize_name(&skill.name)))
        .count()
}
