//! # ActorEntity Trait
//!
//! The contract a resource (a table, an order, a bill) implements to be
//! managed by the generic [`ResourceActor`](crate::ResourceActor). Associated
//! types pin down the id, the create/update payloads, the custom actions and
//! the error type, so each actor only accepts its own messages.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::natural_key`]: uniqueness beyond the generated id
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! The defaults do nothing.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// Hooks are `async` so they can call other actors. The `Context` type is
/// injected into every hook by [`ResourceActor::run`](crate::ResourceActor::run),
/// which lets an actor depend on clients created after it ("late binding").
///
/// # Atomicity
/// `on_update` and `handle_action` receive `&mut self`. If either returns an
/// error the actor restores the entity to the state it had before the call,
/// so a failed command never leaves a half-applied entity behind.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific commands (e.g. `TryBook`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// One error enum per actor. It must be a real `std::error::Error` so it
    /// can travel boxed inside [`FrameworkError::EntityError`](crate::FrameworkError::EntityError)
    /// and be downcast again on the client side.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// A business key that must be unique across the store (a table number,
    /// for instance). Creates that collide are refused with
    /// [`FrameworkError::Conflict`](crate::FrameworkError::Conflict).
    fn natural_key(&self) -> Option<String> {
        None
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed. Returning an error
    /// keeps the entity in the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
