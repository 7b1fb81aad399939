//! Workflows that span more than one actor.
//!
//! They run inside the table actor's action handler and receive the table
//! by `&mut`, so the table's booking state can only change through them
//! while they are in flight.

mod billing;
mod release;

pub use billing::BillGenerator;
pub use release::{ReleaseOutcome, ReleaseWorkflow};
