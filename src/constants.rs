//! Cross-cutting, shared constants.
//!
//! Weights and thresholds here are the defaults baked into
//! [`EngineConfig`](crate::config::EngineConfig). Engines never read these
//! directly; they receive a config at construction time.
//!
//! # Weight Invariants
//!
//! Search weights sum to `1.0`. Evaluate weights drop the interest term and sum to
//! `0.9`, so a perfect evaluation tops out below a perfect search score. The two
//! sets are intentionally different per mode.

/// Search-mode weight for the skill component.
pub const SEARCH_WEIGHT_SKILL: f64 = 0.4;
/// Search-mode weight for the region component.
pub const SEARCH_WEIGHT_REGION: f64 = 0.3;
/// Search-mode weight for the investment component.
pub const SEARCH_WEIGHT_INVESTMENT: f64 = 0.2;
/// Search-mode weight for the interest component.
pub const SEARCH_WEIGHT_INTEREST: f64 = 0.1;

/// Evaluate-mode weight for the skill component.
pub const EVALUATE_WEIGHT_SKILL: f64 = 0.4;
/// Evaluate-mode weight for the region component.
pub const EVALUATE_WEIGHT_REGION: f64 = 0.3;
/// Evaluate-mode weight for the investment component.
pub const EVALUATE_WEIGHT_INVESTMENT: f64 = 0.2;

/// Number of ranked results returned by a search.
pub const DEFAULT_TOP_K: usize = 5;

/// Minimum name similarity for an evaluated business to count as a catalog match.
pub const MIN_NAME_MATCH_RATIO: f64 = 0.4;

/// Evaluation score at or above which a business is rated "good".
pub const TIER_GOOD_THRESHOLD: f64 = 0.7;
/// Evaluation score at or above which a business is rated "risky".
pub const TIER_RISKY_THRESHOLD: f64 = 0.45;

/// Flat bonus for accessibility-friendly candidates (applied at most once).
pub const ACCESSIBILITY_BONUS: f64 = 0.05;

/// Keywords searched for in candidate description and region text when
/// accessibility-aware ranking is requested. Kept verbatim (Portuguese).
pub const ACCESSIBILITY_KEYWORDS: &[&str] = &[
    "acessível",
    "acesso",
    "telefone",
    "delivery",
    "atendimento por telefone",
    "logística acessível",
    "adaptado",
];

/// Decimal places used for component and final scores in search output.
pub const SEARCH_SCORE_PRECISION: u32 = 3;
/// Decimal places used for the name-match confidence in evaluate output.
pub const MATCH_SCORE_PRECISION: u32 = 3;
/// Decimal places used for values quoted in evaluation reasons.
pub const REASON_PRECISION: u32 = 2;

/// Seven-day validation plan attached to every ranked result.
pub const VALIDATION_PLAN: [&str; 7] = [
    "Dia 1: Conversar com 5 vizinhos/possíveis clientes.",
    "Dia 2: Criar amostra/protótipo do produto ou serviço.",
    "Dia 3: Teste de preço com oferta pequena.",
    "Dia 4: Verificar logística e fornecedores.",
    "Dia 5: Recolher feedback e ajustar.",
    "Dia 6: Anunciar em grupos locais/feiras.",
    "Dia 7: Buscar apoio no Sebrae/Casa do Empreendedor.",
];

/// A named support resource (web page or phone line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ResourceLink {
    /// Display name.
    #[serde(rename = "nome")]
    pub name: &'static str,
    /// URL or phone number.
    pub link: &'static str,
}

/// Support resources attached to every ranked result.
pub const RESOURCE_LINKS: [ResourceLink; 3] = [
    ResourceLink {
        name: "Sebrae-SP",
        link: "https://www.sebraesp.com.br",
    },
    ResourceLink {
        name: "Casa do Empreendedor",
        link: "https://www.prefeitura.sp.gov.br/casadosempreendedores",
    },
    ResourceLink {
        name: "Linha de apoio",
        link: "(11) 4000-0000",
    },
];
