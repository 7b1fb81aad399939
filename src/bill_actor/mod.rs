//! # Bill Actor
//!
//! Stores bills. A bill is created once per order, never deleted by the
//! billing flow, and only its payment status changes afterwards.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Bill`]
//! - [`actions`] - [`BillAction::Settle`]
//! - [`error`] - [`BillError`]

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::BillClient;
use crate::model::Bill;
use actor_framework::ResourceActor;

/// Creates a new Bill actor and its client.
pub fn new(mailbox_size: usize) -> (ResourceActor<Bill>, BillClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_size);
    (actor, BillClient::new(generic_client))
}
