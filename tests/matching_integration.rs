//! End-to-end matching over CSV catalogs.

mod common;

use bizmatch::catalog::{CatalogError, CatalogSource, CsvCatalogSource};
use bizmatch::config::EngineConfig;
use bizmatch::engine::{EvaluationEngine, NO_MATCH_REASON, RankingEngine, Tier};
use bizmatch::query::{EvaluateQuery, SearchQuery};
use common::fixtures::{CandidateBuilder, candidates_to_csv, sample_catalog_path};
use serde_json::{Value, json};
use tempfile::TempDir;

fn load_sample() -> bizmatch::Catalog {
    CsvCatalogSource::new(sample_catalog_path())
        .load()
        .expect("sample catalog loads")
}

#[test]
fn test_sample_catalog_loads_normalized() {
    let catalog = load_sample();
    assert_eq!(catalog.len(), 8);

    let atelier = &catalog.candidates()[0];
    assert_eq!(atelier.id, "1");
    assert_eq!(atelier.estimated_investment, 1500.0);
    assert_eq!(atelier.required_skills, vec!["costura", "vendas", "atendimento"]);
    assert_eq!(atelier.regions, vec!["vila mariana", "moema", "saúde"]);
}

#[test]
fn test_search_over_sample_catalog() {
    let engine = RankingEngine::new(load_sample(), EngineConfig::default());
    let query = SearchQuery::from_raw(
        "Vila Mariana",
        "Costura;Vendas",
        "moda",
        &json!("1,500"),
        &Value::Null,
    );

    let results = engine.search(&query).expect("search");
    assert_eq!(results.len(), 5);
    assert_eq!(results.results[0].candidate.id, "1");
    assert!(
        results
            .results
            .windows(2)
            .all(|w| w[0].score >= w[1].score)
    );
}

#[test]
fn test_accessibility_only_search_keeps_catalog_order_on_ties() {
    let engine = RankingEngine::new(load_sample(), EngineConfig::default());
    let query = SearchQuery::from_raw("", "", "", &Value::Null, &json!(true));

    let results = engine.search(&query).expect("search");
    let ids: Vec<&str> = results
        .results
        .iter()
        .map(|r| r.candidate.id.as_str())
        .collect();

    // delivery/telefone, adaptado, acessível, delivery; then the first zero score
    assert_eq!(ids, vec!["2", "4", "5", "6", "1"]);
    assert_eq!(results.results[0].breakdown.accessibility_bonus, 0.05);
    assert_eq!(results.results[4].score, 0.0);
}

#[test]
fn test_evaluate_over_sample_catalog() {
    let engine = EvaluationEngine::new(load_sample(), EngineConfig::default());
    let query = EvaluateQuery::from_raw(
        "Mooca",
        "Brechó Solidário",
        "vendas;organização;atendimento",
        &json!(1000),
    );

    let result = engine.evaluate(&query).expect("evaluate");
    assert_eq!(result.tier, Tier::Good);
    assert_eq!(result.matched.as_ref().map(|c| c.id.as_str()), Some("3"));
    assert!(!result.offer_suggestions);
}

#[test]
fn test_evaluate_unknown_business_over_sample_catalog() {
    let engine = EvaluationEngine::new(load_sample(), EngineConfig::default());
    let query = EvaluateQuery::from_raw("", "xyzw", "", &Value::Null);

    let result = engine.evaluate(&query).expect("evaluate");
    assert_eq!(result.tier, Tier::NotRecommended);
    assert_eq!(result.reasons, vec![NO_MATCH_REASON.to_string()]);
}

#[test]
fn test_search_over_written_catalog() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("catalog.csv");

    let candidates = vec![
        CandidateBuilder::new()
            .id("a")
            .name("Feira de Artesanato")
            .skills(&["artesanato", "vendas"])
            .regions(&["penha"])
            .investment(400.0)
            .build(),
        CandidateBuilder::new()
            .id("b")
            .name("Lava Rápido")
            .skills(&["limpeza"])
            .regions(&["penha"])
            .investment(5000.0)
            .description("Atendimento por telefone")
            .build(),
    ];
    std::fs::write(&path, candidates_to_csv(&candidates)).expect("write csv");

    let source = CsvCatalogSource::new(&path);
    let engine = RankingEngine::new(source.load().expect("load"), EngineConfig::default());
    let query = SearchQuery::from_raw("penha", "artesanato", "", &json!(500), &json!(1));

    let results = engine.search(&query).expect("search");
    assert_eq!(results.results[0].candidate.id, "a");
    assert_eq!(results.results[1].breakdown.accessibility_bonus, 0.05);
}

#[test]
fn test_missing_catalog_file_is_not_found() {
    let dir = TempDir::new().expect("temp dir");
    let source = CsvCatalogSource::new(dir.path().join("absent.csv"));

    assert!(!source.is_available());
    let err = source.load().expect_err("missing file");
    assert!(matches!(err, CatalogError::NotFound { .. }));
}

#[test]
fn test_search_results_serialize_for_clients() {
    let engine = RankingEngine::new(load_sample(), EngineConfig::default());
    let query = SearchQuery::from_raw("moema", "", "", &Value::Null, &Value::Null);

    let value = serde_json::to_value(engine.search(&query).expect("search")).expect("serialize");
    let first = &value["results"][0];

    for key in [
        "id",
        "nome",
        "descricao",
        "investimento_estimado",
        "concorrencia",
        "regiao_alvo",
        "razao",
        "score_components",
        "score",
        "validacao_7_dias",
        "links_uteis",
    ] {
        assert!(first.get(key).is_some(), "missing key {key}");
    }
}
