//! # Table Actor
//!
//! The table registry. It is the only writer of a table's booking state and
//! the coordinator of the two workflows that touch more than one store:
//!
//! - **Bill generation** ([`BillGenerator`]): commit order, book table,
//!   create bill, with compensation on failure.
//! - **Release** ([`ReleaseWorkflow`]): mark the order served, free the table.
//!
//! Both run inside the table actor's handler, so readers of the table store
//! never see a half-finished workflow.
//!
//! ## Dependencies
//!
//! ```text
//! TableActor ──▶ OrderActor
//!     │
//!     └────────▶ BillActor
//! ```
//!
//! The order and bill actors never call back, so the graph is acyclic and a
//! handler waiting on them cannot deadlock.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::TableClient;
use crate::model::Table;
use crate::notifier::ChangeNotifier;
use crate::workflows::{BillGenerator, ReleaseWorkflow};
use actor_framework::ResourceActor;

/// Runtime dependencies of the table actor, injected through
/// [`ResourceActor::run`].
#[derive(Clone)]
pub struct TableContext {
    pub billing: BillGenerator,
    pub release: ReleaseWorkflow,
    pub notifier: ChangeNotifier,
}

/// Creates a new Table actor and its client.
pub fn new(mailbox_size: usize) -> (ResourceActor<Table>, TableClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_size);
    (actor, TableClient::new(generic_client))
}
