use serde::Serialize;
use tracing::{debug, instrument};

use super::error::{EngineError, EngineResult};
use crate::catalog::{Candidate, Catalog};
use crate::config::EngineConfig;
use crate::constants::{RESOURCE_LINKS, ResourceLink, VALIDATION_PLAN};
use crate::query::SearchQuery;
use crate::scoring::types::serialize_search_score;
use crate::scoring::{
    ScoreBreakdown, accessibility_bonus, investment_score, jaccard, region_score, skill_score,
};

#[derive(Debug, Clone, Serialize)]
/// One entry of a search response.
pub struct RankedResult {
    /// The matched catalog entry.
    #[serde(flatten)]
    pub candidate: Candidate,
    /// Per-factor scores.
    #[serde(rename = "score_components")]
    pub breakdown: ScoreBreakdown,
    /// Final combined score in `[0, 1]` (unrounded; rounded on output).
    #[serde(serialize_with = "serialize_search_score")]
    pub score: f64,
    /// Seven-day validation plan.
    #[serde(rename = "validacao_7_dias")]
    pub validation_plan: &'static [&'static str],
    /// Support resources.
    #[serde(rename = "links_uteis")]
    pub resource_links: &'static [ResourceLink],
}

impl RankedResult {
    /// Wraps a scored candidate with the static advisory content.
    pub fn new(candidate: Candidate, breakdown: ScoreBreakdown) -> Self {
        Self {
            candidate,
            score: breakdown.total,
            breakdown,
            validation_plan: &VALIDATION_PLAN,
            resource_links: &RESOURCE_LINKS,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
/// Search response: at most `top_k` results, best first.
pub struct SearchResults {
    pub results: Vec<RankedResult>,
}

impl SearchResults {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Top-k search over a catalog snapshot.
#[derive(Debug, Clone)]
pub struct RankingEngine {
    catalog: Catalog,
    config: EngineConfig,
}

impl RankingEngine {
    pub fn new(catalog: Catalog, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Scores a single candidate against `query`.
    pub fn score_candidate(&self, query: &SearchQuery, candidate: &Candidate) -> ScoreBreakdown {
        let skill = skill_score(&query.skills, &candidate.required_skills);
        let region = region_score(&query.locality, &candidate.regions);
        let investment = investment_score(query.capital, candidate.estimated_investment);
        let interest = jaccard(&query.interests, &candidate.interests);

        let bonus = if query.accessibility {
            let accessibility = &self.config.accessibility;
            accessibility_bonus(
                &candidate.accessibility_text(),
                &accessibility.keywords,
                accessibility.bonus,
            )
        } else {
            0.0
        };

        ScoreBreakdown::new(
            &self.config.search_weights,
            skill,
            region,
            investment,
            interest,
            bonus,
        )
    }

    /// Scores every candidate and returns the best `top_k`.
    ///
    /// Ordering uses unrounded scores; equal scores keep catalog order.
    #[instrument(skip(self, query), fields(catalog_size = self.catalog.len()))]
    pub fn search(&self, query: &SearchQuery) -> EngineResult<SearchResults> {
        let mut scored = Vec::with_capacity(self.catalog.len());
        for candidate in &self.catalog {
            let breakdown = self.score_candidate(query, candidate);
            if !breakdown.is_finite() {
                return Err(EngineError::NonFiniteScore {
                    candidate_id: candidate.id.clone(),
                });
            }
            scored.push((candidate, breakdown));
        }

        // sort_by is stable
        scored.sort_by(|a, b| b.1.total.total_cmp(&a.1.total));
        scored.truncate(self.config.top_k);

        let results: Vec<RankedResult> = scored
            .into_iter()
            .map(|(candidate, breakdown)| RankedResult::new(candidate.clone(), breakdown))
            .collect();

        debug!(
            returned = results.len(),
            top_score = results.first().map(|r| r.score),
            "Search ranked"
        );

        Ok(SearchResults { results })
    }
}
