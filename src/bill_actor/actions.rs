//! Custom actions for the Bill actor.

#[derive(Debug, Clone)]
pub enum BillAction {
    /// Records payment. A bill is settled at most once.
    Settle,
}

/// Results from BillActions - variants match 1:1 with BillAction
#[derive(Debug, Clone)]
pub enum BillActionResult {
    Settle(()),
}
