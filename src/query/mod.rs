//! Query decoding with explicit fallbacks.
//!
//! Raw user input is messy: blank fields, `;`-delimited lists with stray spaces,
//! capital typed as `"1,500"` or not at all. Every field has one parse function
//! here with a documented default, and nothing downstream re-checks.
//!
//! | field | parser | fallback |
//! |---|---|---|
//! | locality, business name | [`normalize_text`] | `""` |
//! | skills, interests, regions | [`split_tokens`] | `[]` |
//! | capital, investment | [`parse_amount`] / [`parse_amount_value`] | `0.0` |
//! | accessibility flag | [`parse_flag_value`] | `false` |


use serde_json::Value;

/// Delimiter used by list-valued fields, both in queries and in the catalog.
pub const LIST_DELIMITER: char = ';';

/// Trims and lower-cases free text.
pub fn normalize_text(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Splits a `;`-delimited list into trimmed, lower-cased, non-empty tokens.
pub fn split_tokens(raw: &str) -> Vec<String> {
    raw.split(LIST_DELIMITER)
        .map(normalize_text)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Parses a locale-formatted amount such as `"1,500.50"`.
///
/// Thousands separators (commas) are stripped before parsing. Anything that does
/// not yield a finite, non-negative number maps to `0.0`.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    cleaned
        .trim()
        .parse::<f64>()
        .ok()
        .map(sanitize_amount)
        .unwrap_or(0.0)
}

/// Coerces a JSON value (number, numeric string, null, ...) into an amount.
pub fn parse_amount_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().map(sanitize_amount).unwrap_or(0.0),
        Value::String(s) => parse_amount(s),
        _ => 0.0,
    }
}

/// Coerces a JSON value into a flag using truthiness: `false`, `0`, `""`, `null`,
/// empty arrays and empty objects are false; everything else is true.
pub fn parse_flag_value(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Coerces a JSON value into text; non-string scalars are rendered, null is empty.
pub fn text_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Profile submitted for a top-k search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    /// Lower-cased neighborhood / locality, possibly empty.
    pub locality: String,
    /// Lower-cased skill tokens.
    pub skills: Vec<String>,
    /// Lower-cased interest tokens.
    pub interests: Vec<String>,
    /// Available capital, non-negative.
    pub capital: f64,
    /// Whether accessibility-aware ranking was requested.
    pub accessibility: bool,
}

impl SearchQuery {
    /// Builds a query from raw form values, applying every fallback rule.
    pub fn from_raw(
        locality: &str,
        skills: &str,
        interests: &str,
        capital: &Value,
        accessibility: &Value,
    ) -> Self {
        Self {
            locality: normalize_text(locality),
            skills: split_tokens(skills),
            interests: split_tokens(interests),
            capital: parse_amount_value(capital),
            accessibility: parse_flag_value(accessibility),
        }
    }
}

/// A named business idea to evaluate against the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluateQuery {
    /// Lower-cased neighborhood / locality, possibly empty.
    pub locality: String,
    /// Lower-cased free-text business name.
    pub business_name: String,
    /// Lower-cased skill tokens.
    pub skills: Vec<String>,
    /// Available capital, non-negative.
    pub capital: f64,
}

impl EvaluateQuery {
    /// Builds a query from raw form values, applying every fallback rule.
    pub fn from_raw(locality: &str, business_name: &str, skills: &str, capital: &Value) -> Self {
        Self {
            locality: normalize_text(locality),
            business_name: normalize_text(business_name),
            skills: split_tokens(skills),
            capital: parse_amount_value(capital),
        }
    }
}
