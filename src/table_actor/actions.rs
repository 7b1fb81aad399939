//! Custom actions for the Table actor.
//!
//! `TryBook` and `Release` are the registry primitives. `GenerateBill` and
//! `ReleaseTable` run the multi-store workflows while the table actor holds
//! the table, so no other request to the table store interleaves with them.

use crate::model::{ActorId, Bill, Cart, OrderId};
use crate::workflows::ReleaseOutcome;

#[derive(Debug, Clone)]
pub enum TableAction {
    /// Books the table for `OrderId` if it is available.
    ///
    /// # Errors
    /// `AlreadyBooked` if the table holds an order.
    TryBook(OrderId),
    /// Frees the table. Idempotent.
    Release,
    /// Commits the cart as an order, books the table for it and creates the
    /// bill, all or nothing.
    GenerateBill { cart: Cart, created_by: ActorId },
    /// Marks the current order served (best effort) and frees the table.
    ReleaseTable,
}

/// Results from TableActions - variants match 1:1 with TableAction
#[derive(Debug, Clone)]
pub enum TableActionResult {
    TryBook(()),
    /// `true` if the table was booked before the call.
    Release(bool),
    GenerateBill(Bill),
    ReleaseTable(ReleaseOutcome),
}
