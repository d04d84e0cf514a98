use thiserror::Error;

/// Internal fault raised by the ranking or evaluation engine.
///
/// Bad input never produces this; it is normalized at the query/catalog boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("non-finite score computed for candidate '{candidate_id}'")]
    NonFiniteScore { candidate_id: String },
}

pub type EngineResult<T> = Result<T, EngineError>;
