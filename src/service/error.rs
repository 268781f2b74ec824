use thiserror::Error;

use crate::engine::EngineError;
use crate::query::QueryError;

/// Errors surfaced by the service layer. The engine and query kinds pass
/// through untouched; `Unauthorized` is added by the credential gate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Query(#[from] QueryError),
}
