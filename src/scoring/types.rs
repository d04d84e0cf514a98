use serde::{Serialize, Serializer};

use crate::constants::{
    EVALUATE_WEIGHT_INVESTMENT, EVALUATE_WEIGHT_REGION, EVALUATE_WEIGHT_SKILL,
    SEARCH_SCORE_PRECISION, SEARCH_WEIGHT_INTEREST, SEARCH_WEIGHT_INVESTMENT,
    SEARCH_WEIGHT_REGION, SEARCH_WEIGHT_SKILL,
};

/// Rounds `value` to `places` decimal places (half away from zero).
///
/// Only used when presenting scores; comparisons always use unrounded values.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

pub(crate) fn serialize_search_score<S: Serializer>(
    value: &f64,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_to(*value, SEARCH_SCORE_PRECISION))
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Component weights for search mode.
pub struct SearchWeights {
    pub skill: f64,
    pub region: f64,
    pub investment: f64,
    pub interest: f64,
}

impl Default for SearchWeights {
    fn default() -> Self {
        Self {
            skill: SEARCH_WEIGHT_SKILL,
            region: SEARCH_WEIGHT_REGION,
            investment: SEARCH_WEIGHT_INVESTMENT,
            interest: SEARCH_WEIGHT_INTEREST,
        }
    }
}

impl SearchWeights {
    /// Weighted sum of the four components (no bonus, no clamp).
    pub fn combine(&self, skill: f64, region: f64, investment: f64, interest: f64) -> f64 {
        self.skill * skill
            + self.region * region
            + self.investment * investment
            + self.interest * interest
    }

    pub fn sum(&self) -> f64 {
        self.skill + self.region + self.investment + self.interest
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Component weights for evaluate mode (no interest term).
pub struct EvaluateWeights {
    pub skill: f64,
    pub region: f64,
    pub investment: f64,
}

impl Default for EvaluateWeights {
    fn default() -> Self {
        Self {
            skill: EVALUATE_WEIGHT_SKILL,
            region: EVALUATE_WEIGHT_REGION,
            investment: EVALUATE_WEIGHT_INVESTMENT,
        }
    }
}

impl EvaluateWeights {
    /// Weighted sum of the three components.
    pub fn combine(&self, skill: f64, region: f64, investment: f64) -> f64 {
        self.skill * skill + self.region * region + self.investment * investment
    }

    pub fn sum(&self) -> f64 {
        self.skill + self.region + self.investment
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
/// Per-factor scores for one candidate in search mode.
///
/// Values are stored unrounded and rounded to three places when serialized.
pub struct ScoreBreakdown {
    #[serde(rename = "habilidades", serialize_with = "serialize_search_score")]
    pub skill: f64,
    #[serde(rename = "regiao", serialize_with = "serialize_search_score")]
    pub region: f64,
    #[serde(rename = "investimento", serialize_with = "serialize_search_score")]
    pub investment: f64,
    #[serde(rename = "interesses", serialize_with = "serialize_search_score")]
    pub interest: f64,
    /// `0.0` or the configured accessibility bonus.
    #[serde(rename = "pcd_boost", serialize_with = "serialize_search_score")]
    pub accessibility_bonus: f64,
    /// Weighted sum plus bonus, clamped to `[0, 1]`.
    #[serde(skip)]
    pub total: f64,
}

impl ScoreBreakdown {
    /// Combines components with `weights`, adds the bonus and clamps the total.
    pub fn new(
        weights: &SearchWeights,
        skill: f64,
        region: f64,
        investment: f64,
        interest: f64,
        accessibility_bonus: f64,
    ) -> Self {
        let base = weights.combine(skill, region, investment, interest);
        Self {
            skill,
            region,
            investment,
            interest,
            accessibility_bonus,
            total: (base + accessibility_bonus).clamp(0.0, 1.0),
        }
    }

    /// Returns `true` if every stored value is a finite number.
    pub fn is_finite(&self) -> bool {
        [
            self.skill,
            self.region,
            self.investment,
            self.interest,
            self.accessibility_bonus,
            self.total,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// Per-factor scores for an evaluated business.
pub struct EvaluationScores {
    pub skill: f64,
    pub region: f64,
    pub investment: f64,
    /// Weighted sum (not clamped; the weights already cap it at their sum).
    pub total: f64,
}

impl EvaluationScores {
    pub fn new(weights: &EvaluateWeights, skill: f64, region: f64, investment: f64) -> Self {
        Self {
            skill,
            region,
            investment,
            total: weights.combine(skill, region, investment),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.skill.is_finite()
            && self.region.is_finite()
            && self.investment.is_finite()
            && self.total.is_finite()
    }
}
