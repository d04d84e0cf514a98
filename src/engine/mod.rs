//! Query modes built on the scorers.
//!
//! - [`RankingEngine`] scores every candidate for a [`SearchQuery`](crate::query::SearchQuery)
//!   with four weighted factors (+ optional accessibility bonus) and keeps the top k.
//! - [`EvaluationEngine`] matches a business name to its closest catalog entry and
//!   rates it with three weighted factors into a [`Tier`].
//!
//! Both engines own a [`Catalog`](crate::catalog::Catalog) snapshot and an
//! [`EngineConfig`](crate::config::EngineConfig) handed in at construction. They
//! hold no mutable state, so a single engine can serve concurrent callers.
//!
//! # Errors
//!
//! [`EngineError`] is reserved for internal faults (a score that is not a finite
//! number). Callers should report it as a generic failure; partial results are
//! never returned.

pub mod error;
pub mod evaluation;
pub mod ranking;


pub use error::{EngineError, EngineResult};
pub use evaluation::{
    EvaluationEngine, EvaluationResult, NO_MATCH_REASON, Tier, format_reason_value,
};
pub use ranking::{RankedResult, RankingEngine, SearchResults};
