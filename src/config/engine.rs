//! Engine configuration.
//!
//! Passed by value into [`RankingEngine`](crate::engine::RankingEngine) and
//! [`EvaluationEngine`](crate::engine::EvaluationEngine); there is no global
//! instance. [`EngineConfig::default`] reproduces the stock weights, thresholds
//! and keyword list from [`crate::constants`].

use crate::constants::{
    ACCESSIBILITY_BONUS, ACCESSIBILITY_KEYWORDS, DEFAULT_TOP_K, MIN_NAME_MATCH_RATIO,
    TIER_GOOD_THRESHOLD, TIER_RISKY_THRESHOLD,
};
use crate::scoring::{EvaluateWeights, SearchWeights};

use super::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Score cut-offs for evaluation tiers.
pub struct TierThresholds {
    /// Minimum score for "good".
    pub good: f64,
    /// Minimum score for "risky".
    pub risky: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            good: TIER_GOOD_THRESHOLD,
            risky: TIER_RISKY_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Accessibility-aware ranking settings.
pub struct AccessibilityConfig {
    /// Flat bonus added once when any keyword matches.
    pub bonus: f64,
    /// Lower-case keywords searched for in candidate text.
    pub keywords: Vec<String>,
}

impl Default for AccessibilityConfig {
    fn default() -> Self {
        Self {
            bonus: ACCESSIBILITY_BONUS,
            keywords: ACCESSIBILITY_KEYWORDS
                .iter()
                .map(|kw| kw.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Everything the ranking and evaluation engines need besides the catalog.
pub struct EngineConfig {
    /// Maximum number of search results.
    pub top_k: usize,
    /// Search-mode component weights.
    pub search_weights: SearchWeights,
    /// Evaluate-mode component weights.
    pub evaluate_weights: EvaluateWeights,
    /// Evaluation tier cut-offs.
    pub tiers: TierThresholds,
    /// Minimum name similarity for an evaluated business to match a catalog entry.
    pub min_name_match: f64,
    /// Accessibility bonus settings.
    pub accessibility: AccessibilityConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            search_weights: SearchWeights::default(),
            evaluate_weights: EvaluateWeights::default(),
            tiers: TierThresholds::default(),
            min_name_match: MIN_NAME_MATCH_RATIO,
            accessibility: AccessibilityConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Checks that weights, thresholds and the bonus are finite and consistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let search = &self.search_weights;
        let evaluate = &self.evaluate_weights;
        let weights = [
            search.skill,
            search.region,
            search.investment,
            search.interest,
            evaluate.skill,
            evaluate.region,
            evaluate.investment,
        ];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(invalid("weights must be finite and non-negative"));
        }

        if !(self.tiers.risky.is_finite() && self.tiers.good.is_finite())
            || self.tiers.risky > self.tiers.good
        {
            return Err(invalid("tier thresholds must be finite with risky <= good"));
        }

        if !(0.0..=1.0).contains(&self.min_name_match) {
            return Err(invalid("min_name_match must be within [0, 1]"));
        }

        if !self.accessibility.bonus.is_finite() || self.accessibility.bonus < 0.0 {
            return Err(invalid("accessibility bonus must be finite and non-negative"));
        }

        if self.accessibility.keywords.iter().any(|kw| kw.is_empty()) {
            return Err(invalid("accessibility keywords must not be empty strings"));
        }

        Ok(())
    }
}

fn invalid(reason: &str) -> ConfigError {
    ConfigError::InvalidEngineConfig {
        reason: reason.to_string(),
    }
}
