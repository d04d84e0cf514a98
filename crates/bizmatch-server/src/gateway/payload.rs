//! Request bodies as sent by the web form.
//!
//! Every field is optional and loosely typed (a number may arrive as a string, a
//! flag as `"on"`), so fields are kept as raw JSON and coerced by the query parsers.
//! Unknown fields are ignored.

use serde::Deserialize;
use serde_json::Value;

use bizmatch::query::{EvaluateQuery, SearchQuery, text_value};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    #[serde(rename = "bairro")]
    pub locality: Value,
    #[serde(rename = "habilidades")]
    pub skills: Value,
    #[serde(rename = "interesses")]
    pub interests: Value,
    #[serde(rename = "investimento")]
    pub capital: Value,
    #[serde(rename = "pcd_mode")]
    pub accessibility: Value,
}

impl SearchRequest {
    pub fn into_query(self) -> SearchQuery {
        SearchQuery::from_raw(
            &text_value(&self.locality),
            &text_value(&self.skills),
            &text_value(&self.interests),
            &self.capital,
            &self.accessibility,
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EvaluateRequest {
    #[serde(rename = "bairro")]
    pub locality: Value,
    #[serde(rename = "nome_negocio")]
    pub business_name: Value,
    #[serde(rename = "habilidades")]
    pub skills: Value,
    #[serde(rename = "investimento")]
    pub capital: Value,
}

impl EvaluateRequest {
    pub fn into_query(self) -> EvaluateQuery {
        EvaluateQuery::from_raw(
            &text_value(&self.locality),
            &text_value(&self.business_name),
            &text_value(&self.skills),
            &self.capital,
        )
    }
}
