//! # Table Service
//!
//! Table booking, order commit and bill generation for a restaurant floor,
//! built from resource-oriented actors on top of [`actor_framework`].
//!
//! A waiter fills a [`Cart`](model::Cart) client-side and asks for the bill.
//! One call then commits the order, books the table and creates the bill.
//! Either all three happen or none does. Releasing the table marks the order
//! served and frees the table. Terminals follow the floor through a
//! [`Subscription`](notifier::Subscription).
//!
//! ## Architecture Notes
//!
//! ### 1. One writer per store
//! Tables, orders and bills each live in a `ResourceActor`. An actor handles
//! one message at a time, so `try_book` is a true compare-and-set and two
//! waiters racing for the same table get exactly one winner.
//!
//! ### 2. Workflows inside the table actor
//! [`GenerateBill`](table_actor::TableAction::GenerateBill) and
//! [`ReleaseTable`](table_actor::TableAction::ReleaseTable) run in the table
//! actor's handler and call out to the order and bill actors. Nobody reads a
//! table that is booked but has no bill yet. The order and bill actors never
//! call back, so this cannot deadlock.
//!
//! ### 3. Typed errors across the channel
//! Each actor has its own `thiserror` enum. Entity errors are boxed on the way
//! through the framework and recovered with
//! [`FrameworkError::downcast_entity`](actor_framework::FrameworkError::downcast_entity).
//!
//! ### 4. Events after commit
//! The [`ChangeNotifier`](notifier::ChangeNotifier) is told about a change
//! only once it has been applied. Publishing never fails the change.
//!
//! ## Module Tour
//!
//! - [`model`]: tables, orders, bills, cart, menu and money arithmetic.
//! - [`table_actor`], [`order_actor`], [`bill_actor`]: the `ActorEntity` impls.
//! - [`workflows`]: bill generation with compensation, and release.
//! - [`clients`]: typed wrappers around `ResourceClient`.
//! - [`notifier`]: scoped change events.
//! - [`config`]: [`ServiceConfig`](config::ServiceConfig), defaults and env overrides.
//! - [`lifecycle`]: [`TableSystem`](lifecycle::TableSystem) wires and stops everything.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod bill_actor;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod notifier;
pub mod order_actor;
pub mod table_actor;
pub mod workflows;
