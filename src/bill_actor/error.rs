//! Error types for the Bill actor.

use crate::model::BillId;
use actor_framework::FrameworkError;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum BillError {
    #[error("Bill not found: {0}")]
    NotFound(String),

    /// The figures handed over do not add up for the given lines.
    #[error("Inconsistent bill totals: {0}")]
    InconsistentTotals(String),

    #[error("Bill {0} is already settled")]
    AlreadySettled(BillId),

    #[error("Bill store timed out after {0:?}")]
    PersistenceTimeout(Duration),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for BillError {
    fn from(msg: String) -> Self {
        BillError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for BillError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<BillError>() {
            Ok(typed) => typed,
            Err(FrameworkError::NotFound(id)) => BillError::NotFound(id),
            Err(FrameworkError::Timeout(limit)) => BillError::PersistenceTimeout(limit),
            Err(other) => BillError::ActorCommunicationError(other.to_string()),
        }
    }
}
