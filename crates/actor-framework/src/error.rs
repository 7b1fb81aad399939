//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself. Domain failures travel inside
//! [`FrameworkError::EntityError`] and are recovered on the client side with
//! [`FrameworkError::downcast_entity`], so a `TableError::AlreadyBooked` raised
//! inside an actor reaches the caller as the same typed value.

use std::time::Duration;

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    /// Another entity already holds the same natural key.
    #[error("Conflict on key: {0}")]
    Conflict(String),
    /// The actor did not answer within the client's bound. The request may
    /// still have been applied.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the typed entity error carried by [`FrameworkError::EntityError`].
    ///
    /// Returns the original error unchanged when it is a plumbing error or an
    /// entity error of a different type.
    pub fn downcast_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => inner
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, FrameworkError::Timeout(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("seat taken")]
    struct SeatTaken;

    #[derive(Debug, thiserror::Error)]
    #[error("other")]
    struct Other;

    #[test]
    fn downcast_recovers_the_typed_entity_error() {
        let err = FrameworkError::EntityError(Box::new(SeatTaken));
        assert_eq!(err.downcast_entity::<SeatTaken>().unwrap(), SeatTaken);
    }

    #[test]
    fn downcast_keeps_foreign_errors_intact() {
        let err = FrameworkError::EntityError(Box::new(Other));
        let back = err.downcast_entity::<SeatTaken>().unwrap_err();
        assert_eq!(back.to_string(), "Entity error: other");

        let timeout = FrameworkError::Timeout(Duration::from_millis(5));
        assert!(timeout.downcast_entity::<SeatTaken>().unwrap_err().is_timeout());
    }
}
