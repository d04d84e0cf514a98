use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{debug, info, instrument};

use crate::gateway::error::GatewayError;
use crate::gateway::payload::{EvaluateRequest, SearchRequest};
use crate::gateway::state::HandlerState;
use bizmatch::engine::{EvaluationEngine, EvaluationResult, RankingEngine, SearchResults};

#[instrument(skip(state, request))]
pub async fn search_handler(
    State(state): State<HandlerState>,
    request: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResults>, GatewayError> {
    let Json(request) = request.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
    let query = request.into_query();

    debug!(
        locality = %query.locality,
        skills = query.skills.len(),
        interests = query.interests.len(),
        capital = query.capital,
        accessibility = query.accessibility,
        "Processing search request"
    );

    let results = tokio::task::spawn_blocking(move || {
        let catalog = state.load_catalog();
        RankingEngine::new(catalog, state.engine_config()).search(&query)
    })
    .await
    .map_err(|e| GatewayError::SearchFailed(e.to_string()))?
    .map_err(|e| GatewayError::SearchFailed(e.to_string()))?;

    info!(returned = results.len(), "Search complete");
    Ok(Json(results))
}

#[instrument(skip(state, request))]
pub async fn evaluate_handler(
    State(state): State<HandlerState>,
    request: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<EvaluationResult>, GatewayError> {
    let Json(request) = request.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
    let query = request.into_query();

    debug!(
        business_name = %query.business_name,
        locality = %query.locality,
        "Processing evaluate request"
    );

    let result = tokio::task::spawn_blocking(move || {
        let catalog = state.load_catalog();
        EvaluationEngine::new(catalog, state.engine_config()).evaluate(&query)
    })
    .await
    .map_err(|e| GatewayError::EvaluationFailed(e.to_string()))?
    .map_err(|e| GatewayError::EvaluationFailed(e.to_string()))?;

    info!(
        tier = %result.tier,
        match_confidence = result.match_confidence,
        "Evaluation complete"
    );
    Ok(Json(result))
}
