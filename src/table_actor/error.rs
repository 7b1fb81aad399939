//! Error types for the Table actor.
//!
//! Bill generation crosses into the order and bill stores, so their errors
//! nest here unchanged.

use crate::bill_actor::BillError;
use crate::model::{CartError, TableId};
use crate::order_actor::OrderError;
use actor_framework::FrameworkError;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TableError {
    #[error("Table not found: {0}")]
    NotFound(String),

    /// Lost the booking race: the table already holds an active order.
    #[error("Table {0} is already booked")]
    AlreadyBooked(TableId),

    #[error("Table number {0} is already in use")]
    DuplicateNumber(u32),

    #[error("Invalid table: number {number}, capacity {capacity}")]
    InvalidTable { number: u32, capacity: u32 },

    /// Booked tables cannot be removed.
    #[error("Table {0} is occupied")]
    Occupied(TableId),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Bill(#[from] BillError),

    #[error("Table store timed out after {0:?}")]
    PersistenceTimeout(Duration),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl TableError {
    /// True when the outcome of the request is unknown because some store
    /// did not answer in time. Re-read before retrying.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            TableError::PersistenceTimeout(_)
                | TableError::Order(OrderError::PersistenceTimeout(_))
                | TableError::Bill(BillError::PersistenceTimeout(_))
        )
    }
}

impl From<String> for TableError {
    fn from(msg: String) -> Self {
        TableError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for TableError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<TableError>() {
            Ok(typed) => typed,
            Err(FrameworkError::NotFound(id)) => TableError::NotFound(id),
            Err(FrameworkError::Conflict(key)) => match key.parse() {
                Ok(number) => TableError::DuplicateNumber(number),
                Err(_) => TableError::ActorCommunicationError(format!("Conflict on key: {key}")),
            },
            Err(FrameworkError::Timeout(limit)) => TableError::PersistenceTimeout(limit),
            Err(other) => TableError::ActorCommunicationError(other.to_string()),
        }
    }
}
