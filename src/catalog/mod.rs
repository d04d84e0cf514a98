//! Business-opportunity catalog.
//!
//! A [`Catalog`] is an immutable snapshot of [`Candidate`] records. It is built once
//! per load by a [`CatalogSource`] and then only read, so one snapshot can back any
//! number of concurrent searches without synchronization.
//!
//! All normalization (list splitting, lower-casing, amount parsing) happens at the
//! load boundary; scoring code assumes candidates are already clean.

pub mod error;
pub mod loader;


pub use error::{CatalogError, CatalogResult};
pub use loader::{CsvCatalogSource, RawCandidateRow};

use serde::Serialize;
use std::sync::Arc;

/// One business opportunity.
///
/// Serializes with the wire names used by search results. Skills and interests are
/// scoring inputs only and are not serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Candidate {
    /// Catalog identifier (free text).
    pub id: String,
    /// Business name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Long-form description.
    #[serde(rename = "descricao")]
    pub description: String,
    /// Estimated up-front investment, non-negative; `0.0` when unknown.
    #[serde(rename = "investimento_estimado")]
    pub estimated_investment: f64,
    /// Competition level (free text).
    #[serde(rename = "concorrencia")]
    pub competition: String,
    /// Lower-cased required skill tokens.
    #[serde(skip_serializing)]
    pub required_skills: Vec<String>,
    /// Lower-cased interest tags.
    #[serde(skip_serializing)]
    pub interests: Vec<String>,
    /// Lower-cased target-region names.
    #[serde(rename = "regiao_alvo")]
    pub regions: Vec<String>,
    /// Why this is a good business (free text).
    #[serde(rename = "razao")]
    pub rationale: String,
}

impl Candidate {
    /// Lower-cased description and regions joined by spaces.
    ///
    /// This is the haystack for accessibility keyword matching.
    pub fn accessibility_text(&self) -> String {
        let mut text = self.description.to_lowercase();
        text.push(' ');
        text.push_str(&self.regions.join(" ").to_lowercase());
        text
    }
}

/// Immutable, cheaply clonable catalog snapshot.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    candidates: Arc<[Candidate]>,
}

impl Catalog {
    /// Creates a snapshot from already-normalized candidates (order is preserved).
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates: candidates.into(),
        }
    }

    /// Creates an empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Candidates in catalog order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Returns the number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns `true` if the catalog has no candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Iterates candidates in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }
}

impl From<Vec<Candidate>> for Catalog {
    fn from(candidates: Vec<Candidate>) -> Self {
        Self::new(candidates)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Supplies catalog snapshots.
///
/// Implementations are called once per request; they should not cache between calls.
pub trait CatalogSource: Send + Sync {
    /// Loads a fresh snapshot.
    fn load(&self) -> CatalogResult<Catalog>;

    /// Returns `true` if the backing data is currently available.
    fn is_available(&self) -> bool {
        true
    }
}

/// In-memory catalog source.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    catalog: Catalog,
}

impl StaticCatalogSource {
    /// Wraps a fixed catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

impl CatalogSource for StaticCatalogSource {
    fn load(&self) -> CatalogResult<Catalog> {
        Ok(self.catalog.clone())
    }
}
