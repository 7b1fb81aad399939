//! Error types for the Order actor.

use crate::model::{CartError, OrderId, OrderStatus};
use actor_framework::FrameworkError;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// An order needs at least one line.
    #[error("Order has no items")]
    EmptyCart,

    /// A line breaks the cart rules (quantity, price, duplicate item).
    #[error("Invalid order lines: {0}")]
    InvalidLines(CartError),

    /// Status changes go one step forward at a time.
    #[error("Order {order_id} cannot move from {from} to {to}")]
    InvalidTransition {
        order_id: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    },

    /// The order store did not answer in time. The request may still have
    /// been applied.
    #[error("Order store timed out after {0:?}")]
    PersistenceTimeout(Duration),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<OrderError>() {
            Ok(typed) => typed,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(FrameworkError::Timeout(limit)) => OrderError::PersistenceTimeout(limit),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
