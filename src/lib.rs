//! Bizmatch library crate (used by the server and integration tests).
//!
//! Ranks small-business opportunities from a catalog against an entrepreneur's
//! profile, and rates a named business idea against its closest catalog entry.
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`Config`], [`ConfigError`], [`EngineConfig`] - Server and engine configuration
//! - [`Candidate`], [`Catalog`] - Catalog records and immutable snapshots
//! - [`CatalogSource`], [`CsvCatalogSource`] - Catalog loading
//!
//! ## Queries
//! - [`SearchQuery`], [`EvaluateQuery`] - Normalized user input
//!
//! ## Engines
//! - [`RankingEngine`], [`SearchResults`], [`RankedResult`] - Top-k search
//! - [`EvaluationEngine`], [`EvaluationResult`], [`Tier`] - Name match and viability tier
//!
//! ## Scoring
//! - [`similarity`] and the per-factor scorers in [`scoring`]
//!
//! ## Constants
//! Weights, thresholds and the static advisory content live in [`constants`].
//! Prefer [`EngineConfig`] for runtime overrides.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod engine;
pub mod query;
pub mod scoring;

pub use catalog::{
    Candidate, Catalog, CatalogError, CatalogResult, CatalogSource, CsvCatalogSource,
    StaticCatalogSource,
};
pub use config::{Config, ConfigError, EngineConfig};
pub use engine::{
    EngineError, EngineResult, EvaluationEngine, EvaluationResult, RankedResult, RankingEngine,
    SearchResults, Tier,
};
pub use query::{EvaluateQuery, SearchQuery};
pub use scoring::{ScoreBreakdown, similarity};
