//! # Generic Messages
//!
//! The request envelope sent from a [`ResourceClient`](crate::ResourceClient)
//! to its [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants are the resource lifecycle (create, read, list, update,
/// delete) plus `Action` for entity-specific commands such as booking a table.
/// Every payload is typed by the entity's associated types, so an order
/// payload can never reach the table actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    /// Responds with the stored entity, including its assigned id.
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Snapshot of every stored entity, in no particular order.
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
