//! Similarity functions and per-factor scoring.
//!
//! These are the building blocks of both query modes:
//!
//! | factor | function | used by |
//! |---|---|---|
//! | skill | [`skill_score`] (built on [`similarity`]) | search, evaluate |
//! | region | [`region_score`] | search, evaluate |
//! | investment | [`investment_score`] | search, evaluate |
//! | interest | [`jaccard`] | search |
//! | accessibility | [`accessibility_bonus`] | search (opt-in) |
//!
//! Everything here is pure: no state, no I/O, safe to call from any thread.

pub mod factors;
pub mod similarity;
pub mod types;


pub use factors::{
    REGION_EXACT, REGION_SAME_AREA, accessibility_bonus, investment_score, jaccard, region_score,
    skill_score,
};
pub use similarity::similarity;
pub use types::{EvaluateWeights, EvaluationScores, ScoreBreakdown, SearchWeights, round_to};
