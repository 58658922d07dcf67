//! Errors surfaced by the engine contract.

use thiserror::Error;

/// Rejection of a query before retrieval runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Question cannot be empty")]
    EmptyQuestion,
}
