//! Test fixtures for integration tests.

use bizmatch::catalog::Candidate;
use std::path::PathBuf;

pub const CSV_HEADER: &str = "ID,Nome do Negócio,Descrição Detalhada,Investimento Estimado (R$),Concorrência (SP),Habilidades Requeridas,Gostos/Interesses,Região-Alvo (Exemplos de Bairros),Razão para ser um Bom Negócio";

/// Path of the sample catalog shipped with the repository.
pub fn sample_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/businesses.csv")
}

#[derive(Default)]
pub struct CandidateBuilder {
    id: Option<String>,
    name: Option<String>,
    description: String,
    estimated_investment: f64,
    required_skills: Vec<String>,
    interests: Vec<String>,
    regions: Vec<String>,
}

impl CandidateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn investment(mut self, amount: f64) -> Self {
        self.estimated_investment = amount;
        self
    }

    pub fn skills(mut self, skills: &[&str]) -> Self {
        self.required_skills = skills.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn interests(mut self, interests: &[&str]) -> Self {
        self.interests = interests.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn regions(mut self, regions: &[&str]) -> Self {
        self.regions = regions.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn build(self) -> Candidate {
        let id = self.id.unwrap_or_else(|| "1".to_string());
        Candidate {
            name: self.name.unwrap_or_else(|| format!("Negócio {}", id)),
            id,
            description: self.description,
            estimated_investment: self.estimated_investment,
            competition: "Média".to_string(),
            required_skills: self.required_skills,
            interests: self.interests,
            regions: self.regions,
            rationale: String::new(),
        }
    }
}

/// Renders candidates as catalog CSV rows under the standard header.
pub fn candidates_to_csv(candidates: &[Candidate]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for c in candidates {
        out.push_str(&format!(
            "{},\"{}\",\"{}\",{},{},{},{},{},\"{}\"\n",
            c.id,
            c.name,
            c.description,
            c.estimated_investment,
            c.competition,
            c.required_skills.join(";"),
            c.interests.join(";"),
            c.regions.join(";"),
            c.rationale
        ));
    }
    out
}
