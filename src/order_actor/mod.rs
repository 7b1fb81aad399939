//! # Order Actor
//!
//! The order ledger: committed orders, their lines and their kitchen status.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`actions`] - [`OrderAction::MarkServed`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use actor_framework::ActorClient;
//! use table_service::model::OrderId;
//! use table_service::order_actor::{self, OrderError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = order_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     // Orders are committed by bill generation; a bare ledger is empty.
//!     assert!(client.list().await?.is_empty());
//!     assert!(matches!(
//!         client.mark_served(OrderId(1)).await,
//!         Err(OrderError::NotFound(_))
//!     ));
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(mailbox_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_size);
    (actor, OrderClient::new(generic_client))
}
