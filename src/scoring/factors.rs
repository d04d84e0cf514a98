//! Per-factor scorers. Every function returns a value in `[0, 1]`.

use std::collections::HashSet;

use super::similarity::similarity;

/// Best-match skill coverage.
///
/// Each required skill is scored by its closest user skill, and the result is the
/// mean over *required* skills. Either list being empty yields `0.0`.
pub fn skill_score<U, R>(user_skills: &[U], required_skills: &[R]) -> f64
where
    U: AsRef<str>,
    R: AsRef<str>,
{
    if user_skills.is_empty() || required_skills.is_empty() {
        return 0.0;
    }

    let total: f64 = required_skills
        .iter()
        .map(|required| {
            user_skills
                .iter()
                .map(|user| similarity(required.as_ref(), user.as_ref()))
                .fold(0.0, f64::max)
        })
        .sum();

    total / required_skills.len() as f64
}

/// Case-insensitive Jaccard index of two token collections.
///
/// Defined as `0.0` when both are empty.
pub fn jaccard<A, B>(a: &[A], b: &[B]) -> f64
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let set_a: HashSet<String> = a.iter().map(|t| t.as_ref().to_lowercase()).collect();
    let set_b: HashSet<String> = b.iter().map(|t| t.as_ref().to_lowercase()).collect();

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = set_a.intersection(&set_b).count();
    intersection as f64 / union as f64
}

/// Score awarded when the locality names a target region exactly.
pub const REGION_EXACT: f64 = 1.0;
/// Score awarded when only the first word matches (e.g. "vila prudente" vs "vila mariana").
pub const REGION_SAME_AREA: f64 = 0.5;

/// Tiered locality match: exact `1.0`, shared first word `0.5`, otherwise `0.0`.
///
/// This is a name heuristic, not a distance.
pub fn region_score<R: AsRef<str>>(locality: &str, regions: &[R]) -> f64 {
    let locality = locality.trim().to_lowercase();
    if locality.is_empty() {
        return 0.0;
    }

    if regions.iter().any(|r| r.as_ref() == locality) {
        return REGION_EXACT;
    }

    let first_word = locality.split_whitespace().next();
    if regions
        .iter()
        .any(|r| r.as_ref().split_whitespace().next() == first_word)
    {
        return REGION_SAME_AREA;
    }

    0.0
}

/// Affordability: `1.0` if the user covers the estimate, otherwise the covered fraction.
///
/// A non-positive estimate means the cost is unknown and scores `0.0`.
pub fn investment_score(user_amount: f64, estimated_amount: f64) -> f64 {
    if estimated_amount.is_nan() || estimated_amount <= 0.0 {
        return 0.0;
    }
    if user_amount >= estimated_amount {
        return 1.0;
    }
    (user_amount / estimated_amount).max(0.0)
}

/// Flat bonus if `text` contains any keyword; applied once no matter how many match.
pub fn accessibility_bonus<K: AsRef<str>>(text: &str, keywords: &[K], bonus: f64) -> f64 {
    if keywords.iter().any(|kw| text.contains(kw.as_ref())) {
        bonus
    } else {
        0.0
    }
}
