//! # Actor Framework
//!
//! Building blocks for type-safe, concurrent actor systems. Each kind of
//! resource (tables, orders, bills) lives in its own actor: one Tokio task
//! that owns the store and handles requests strictly one after another. The
//! rest of the program holds cheap, cloneable clients.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]): the domain model and its hooks
//! 2. **Runtime Layer** ([`ResourceActor`]): message processing and the store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]): typed requests
//!
//! Business rules are written once, in the entity. The framework supplies the
//! request plumbing, id allocation, natural-key uniqueness, rollback of failed
//! commands, bounded waits and tracing.
//!
//! ## Sequential Processing
//!
//! A single actor never interleaves two requests. A check-then-act command
//! such as "book this table only if it is free" therefore runs as one step,
//! and of many concurrent callers exactly one can win.
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Booth { id: u32, party: Option<String> }
//!
//! #[derive(Debug)] struct BoothCreate;
//! #[derive(Debug)] struct BoothUpdate;
//! #[derive(Debug)] enum BoothAction { Seat(String) }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("booth already seated")]
//! struct Occupied;
//!
//! #[async_trait]
//! impl ActorEntity for Booth {
//!     type Id = u32;
//!     type Create = BoothCreate;
//!     type Update = BoothUpdate;
//!     type Action = BoothAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = Occupied;
//!
//!     fn from_create_params(id: u32, _: BoothCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, party: None })
//!     }
//!
//!     async fn on_update(&mut self, _: BoothUpdate, _: &()) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: BoothAction, _: &()) -> Result<(), Self::Error> {
//!         let BoothAction::Seat(party) = action;
//!         if self.party.is_some() {
//!             return Err(Occupied);
//!         }
//!         self.party = Some(party);
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Booth>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let booth = client.create(BoothCreate).await.unwrap();
//!     let first = client.perform_action(booth.id, BoothAction::Seat("a".into()));
//!     let second = client.perform_action(booth.id, BoothAction::Seat("b".into()));
//!     let (first, second) = tokio::join!(first, second);
//!     assert!(first.is_ok() ^ second.is_ok());
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected when the actor is started, through
//! [`ResourceActor::run`], not when it is constructed. Every actor can be
//! created first and wired afterwards:
//!
//! ```rust,ignore
//! let (table_actor, table_client) = ResourceActor::<Table>::new(32);
//! let (order_actor, order_client) = ResourceActor::<Order>::new(32);
//!
//! tokio::spawn(order_actor.run(()));
//! // the table actor talks to the order store from inside its handlers
//! tokio::spawn(table_actor.run(TableContext { orders: order_client, .. }));
//! ```
//!
//! Dependencies must form an acyclic graph. An actor that awaits a client of
//! an actor which, in turn, awaits the first one would wait on itself.
//!
//! ## Errors
//!
//! [`FrameworkError`] covers the plumbing (closed actor, missing id, key
//! conflict, timeout). Entity errors travel boxed and are recovered with
//! [`FrameworkError::downcast_entity`].
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient` from scripted
//! expectations, so code that depends on an actor can be tested without one.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
