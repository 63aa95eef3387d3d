pub mod fit;
pub mod pipeline;
pub mod scoring;
pub mod skills;
pub mod weights;

pub use fit::{score_ai_fit, AiFitScore, FitInput};
pub use pipeline::{MatchingEngine, RankedJob};
pub use scoring::{score_job_match, MatchBreakdown, MatchScore, MatchScorer, MatchingConfig};
pub use skills::score_skill_compatibility;
