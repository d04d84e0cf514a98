//! CSV-backed catalog loading.
//!
//! Expected header (extra columns are ignored, missing ones default to empty):
//!
//! ```text
//! ID,Nome do Negócio,Descrição Detalhada,Investimento Estimado (R$),Concorrência (SP),
//! Habilidades Requeridas,Gostos/Interesses,Região-Alvo (Exemplos de Bairros),
//! Razão para ser um Bom Negócio
//! ```

use serde::Deserialize;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::error::{CatalogError, CatalogResult};
use super::{Candidate, Catalog, CatalogSource};
use crate::query::{parse_amount, split_tokens};

/// One CSV row exactly as written, before normalization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCandidateRow {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Nome do Negócio")]
    pub name: String,
    #[serde(rename = "Descrição Detalhada")]
    pub description: String,
    #[serde(rename = "Investimento Estimado (R$)")]
    pub estimated_investment: String,
    #[serde(rename = "Concorrência (SP)")]
    pub competition: String,
    #[serde(rename = "Habilidades Requeridas")]
    pub required_skills: String,
    #[serde(rename = "Gostos/Interesses")]
    pub interests: String,
    #[serde(rename = "Região-Alvo (Exemplos de Bairros)")]
    pub regions: String,
    #[serde(rename = "Razão para ser um Bom Negócio")]
    pub rationale: String,
}

impl From<RawCandidateRow> for Candidate {
    fn from(row: RawCandidateRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            estimated_investment: parse_amount(&row.estimated_investment),
            competition: row.competition,
            required_skills: split_tokens(&row.required_skills),
            interests: split_tokens(&row.interests),
            regions: split_tokens(&row.regions),
            rationale: row.rationale,
        }
    }
}

/// Loads the catalog from a CSV file on every call.
#[derive(Debug, Clone)]
pub struct CsvCatalogSource {
    path: PathBuf,
}

impl CsvCatalogSource {
    /// Creates a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the configured CSV path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses catalog CSV from any reader.
    ///
    /// Rows that fail to decode are skipped with a warning; only an unreadable
    /// header is an error.
    pub fn parse_reader<R: Read>(reader: R) -> Result<Catalog, csv::Error> {
        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        rdr.headers()?;

        let mut candidates = Vec::new();
        for (idx, result) in rdr.deserialize::<RawCandidateRow>().enumerate() {
            match result {
                Ok(row) => candidates.push(Candidate::from(row)),
                Err(e) => {
                    warn!(row = idx + 1, error = %e, "Skipping malformed catalog row");
                }
            }
        }

        Ok(Catalog::new(candidates))
    }
}

impl CatalogSource for CsvCatalogSource {
    fn load(&self) -> CatalogResult<Catalog> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CatalogError::NotFound {
                path: self.path.clone(),
            },
            _ => CatalogError::Io {
                path: self.path.clone(),
                source: e,
            },
        })?;

        let catalog = Self::parse_reader(file).map_err(|e| CatalogError::Csv {
            path: self.path.clone(),
            source: e,
        })?;

        debug!(path = %self.path.display(), candidates = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }
}
