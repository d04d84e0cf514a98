use serde::{Serialize, Serializer};
use std::fmt;
use tracing::{debug, instrument};

use super::error::{EngineError, EngineResult};
use crate::catalog::{Candidate, Catalog};
use crate::config::{EngineConfig, TierThresholds};
use crate::constants::{MATCH_SCORE_PRECISION, REASON_PRECISION};
use crate::query::EvaluateQuery;
use crate::scoring::{
    EvaluationScores, investment_score, region_score, round_to, similarity, skill_score,
};

/// Reason given when no catalog entry resembles the evaluated name.
pub const NO_MATCH_REASON: &str =
    "Não encontramos um negócio parecido no banco de dados para avaliar.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Viability classification of an evaluated business.
pub enum Tier {
    #[serde(rename = "bom")]
    Good,
    #[serde(rename = "risco")]
    Risky,
    #[serde(rename = "não recomendado")]
    NotRecommended,
}

impl Tier {
    /// Classifies a weighted evaluation score.
    pub fn from_score(score: f64, thresholds: &TierThresholds) -> Self {
        if score >= thresholds.good {
            Tier::Good
        } else if score >= thresholds.risky {
            Tier::Risky
        } else {
            Tier::NotRecommended
        }
    }

    /// Wire label.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Good => "bom",
            Tier::Risky => "risco",
            Tier::NotRecommended => "não recomendado",
        }
    }

    pub fn is_good(&self) -> bool {
        matches!(self, Tier::Good)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn serialize_match_score<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_to(*value, MATCH_SCORE_PRECISION))
}

#[derive(Debug, Clone, Serialize)]
/// Outcome of evaluating a named business idea.
pub struct EvaluationResult {
    /// The normalized name that was evaluated.
    #[serde(rename = "nome_avaliado")]
    pub evaluated_name: String,
    /// Name similarity of the best catalog match, `0.0` if none.
    #[serde(rename = "match_score", serialize_with = "serialize_match_score")]
    pub match_confidence: f64,
    #[serde(rename = "evaluation")]
    pub tier: Tier,
    /// Human-readable explanation, in display order.
    pub reasons: Vec<String>,
    /// Whether the caller should offer alternative suggestions.
    #[serde(rename = "suggestions_button")]
    pub offer_suggestions: bool,
    /// Catalog entry the name was matched to (absent below the match threshold).
    #[serde(skip)]
    pub matched: Option<Candidate>,
    /// Component scores against the matched entry.
    #[serde(skip)]
    pub scores: Option<EvaluationScores>,
}

impl EvaluationResult {
    fn no_match(evaluated_name: &str, match_confidence: f64) -> Self {
        Self {
            evaluated_name: evaluated_name.to_string(),
            match_confidence,
            tier: Tier::NotRecommended,
            reasons: vec![NO_MATCH_REASON.to_string()],
            offer_suggestions: true,
            matched: None,
            scores: None,
        }
    }
}

/// Formats a value the way reasons quote it: two decimals at most, at least one.
///
/// `1.0 -> "1.0"`, `0.5 -> "0.5"`, `0.954 -> "0.95"`.
pub fn format_reason_value(value: f64) -> String {
    let rounded = round_to(value, REASON_PRECISION);
    if rounded.fract() == 0.0 {
        format!("{:.1}", rounded)
    } else {
        format!("{}", rounded)
    }
}

/// Matches a free-text business name to the catalog and rates it.
#[derive(Debug, Clone)]
pub struct EvaluationEngine {
    catalog: Catalog,
    config: EngineConfig,
}

impl EvaluationEngine {
    pub fn new(catalog: Catalog, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Finds the candidate whose lower-cased name is most similar to `name`.
    ///
    /// Only strictly positive ratios count, and the first candidate wins ties.
    pub fn best_name_match(&self, name: &str) -> Option<(&Candidate, f64)> {
        let mut best: Option<(&Candidate, f64)> = None;
        for candidate in &self.catalog {
            let ratio = similarity(&candidate.name.to_lowercase(), name);
            let best_ratio = best.map(|(_, r)| r).unwrap_or(0.0);
            if ratio > best_ratio {
                best = Some((candidate, ratio));
            }
        }
        best
    }

    #[instrument(skip(self, query), fields(catalog_size = self.catalog.len()))]
    pub fn evaluate(&self, query: &EvaluateQuery) -> EngineResult<EvaluationResult> {
        let name = query.business_name.to_lowercase();

        let (candidate, confidence) = match self.best_name_match(&name) {
            Some((candidate, ratio)) if ratio >= self.config.min_name_match => {
                (candidate, ratio)
            }
            best => {
                let confidence = best.map(|(_, r)| r).unwrap_or(0.0);
                debug!(confidence, "No catalog entry close enough to evaluate");
                return Ok(EvaluationResult::no_match(&name, confidence));
            }
        };

        let skill = skill_score(&query.skills, &candidate.required_skills);
        let region = region_score(&query.locality, &candidate.regions);
        let investment = investment_score(query.capital, candidate.estimated_investment);
        let scores = EvaluationScores::new(&self.config.evaluate_weights, skill, region, investment);

        if !scores.is_finite() {
            return Err(EngineError::NonFiniteScore {
                candidate_id: candidate.id.clone(),
            });
        }

        let tiers = &self.config.tiers;
        let tier = Tier::from_score(scores.total, tiers);
        let reasons = vec![
            format!("Similaridade com habilidades: {}", format_reason_value(skill)),
            format!("Adequação à região: {}", format_reason_value(region)),
            format!("Adequação ao investimento: {}", format_reason_value(investment)),
            format!(
                "Pontuação final: {} (bom>={}, risco>={})",
                format_reason_value(scores.total),
                format_reason_value(tiers.good),
                format_reason_value(tiers.risky)
            ),
        ];

        debug!(
            candidate_id = %candidate.id,
            confidence,
            score = scores.total,
            tier = %tier,
            "Business evaluated"
        );

        Ok(EvaluationResult {
            evaluated_name: name,
            match_confidence: confidence,
            tier,
            reasons,
            offer_suggestions: !tier.is_good(),
            matched: Some(candidate.clone()),
            scores: Some(scores),
        })
    }
}
