//! Custom actions for the Order actor.
//!
//! Orders are immutable once committed apart from their kitchen status, so
//! the only command is the status change the release workflow needs.

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order from `sent_to_kitchen` to `served`.
    ///
    /// # Errors
    /// `InvalidTransition` from any other status, including `served`.
    MarkServed,
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    MarkServed(()),
}
