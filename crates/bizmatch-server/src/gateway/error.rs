use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Public message for any internal search failure.
pub const SEARCH_FAILURE_MESSAGE: &str =
    "Erro interno ao processar busca. Verifique o CSV e o servidor.";
/// Public message for any internal evaluation failure.
pub const EVALUATE_FAILURE_MESSAGE: &str =
    "Erro interno ao avaliar. Verifique o CSV e o servidor.";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("search failed: {0}")]
    SearchFailed(String),

    #[error("evaluation failed: {0}")]
    EvaluationFailed(String),
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            GatewayError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            GatewayError::SearchFailed(detail) => {
                error!(detail = %detail, "Search request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SEARCH_FAILURE_MESSAGE.to_string(),
                )
            }
            GatewayError::EvaluationFailed(detail) => {
                error!(detail = %detail, "Evaluate request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    EVALUATE_FAILURE_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
            code: status.as_u16(),
        });

        (status, body).into_response()
    }
}
