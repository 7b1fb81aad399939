//! # Change Notifier
//!
//! Publish/subscribe fan-out of committed state changes. The table actor
//! publishes after each mutation it commits; terminals subscribe to one table
//! or to all of them.
//!
//! ```text
//! TableActor ──▶ publish() ──▶ broadcast::Sender<ChangeEvent>
//!                                      │
//!                      ┌───────────────┼───────────────┐
//!                      ▼               ▼               ▼
//!                Subscription    Subscription    Subscription
//!                 (table_4)         (all)           (all)
//! ```
//!
//! Delivery is best effort. Nothing is replayed: a new subscriber, or one
//! that lagged, reads a fresh snapshot and continues from there (see
//! [`TableSystem::connect`](crate::lifecycle::TableSystem::connect)).

use crate::model::{BillId, OrderId, TableId};
use futures::stream::{self, Stream};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};
use tracing::debug;

/// Default capacity of the broadcast channel.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// A committed state transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChangeEvent {
    TableBooked {
        table_id: TableId,
        order_id: OrderId,
    },
    TableReleased {
        table_id: TableId,
    },
    BillGenerated {
        table_id: TableId,
        order_id: OrderId,
        bill_id: BillId,
    },
}

impl ChangeEvent {
    pub fn table_id(&self) -> TableId {
        match self {
            ChangeEvent::TableBooked { table_id, .. }
            | ChangeEvent::TableReleased { table_id }
            | ChangeEvent::BillGenerated { table_id, .. } => *table_id,
        }
    }
}

/// Which events a subscription receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionScope {
    Table(TableId),
    All,
}

impl SubscriptionScope {
    pub fn matches(&self, event: &ChangeEvent) -> bool {
        match self {
            SubscriptionScope::All => true,
            SubscriptionScope::Table(id) => event.table_id() == *id,
        }
    }
}

/// Failure to hand an event to anyone. Logged by [`ChangeNotifier::publish`],
/// never returned to the code that made the change.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NotifyError {
    #[error("No subscribers for {0:?}")]
    NoSubscribers(ChangeEvent),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubscriptionError {
    /// The subscriber fell behind and `0` events were dropped. Re-read the
    /// current state before relying on later events.
    #[error("Subscription lagged, {0} events missed")]
    Lagged(u64),

    #[error("Notifier closed")]
    Closed,
}

#[derive(Debug, Clone)]
pub struct ChangeNotifier {
    tx: broadcast::Sender<ChangeEvent>,
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

impl ChangeNotifier {
    /// `capacity` is how many events a slow subscriber may fall behind before
    /// it starts missing them.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Publishes `event` to every current subscriber. Never blocks and never
    /// fails the caller.
    pub fn publish(&self, event: ChangeEvent) {
        if let Err(e) = self.try_publish(event) {
            debug!(error = %e, "Event not delivered");
        }
    }

    /// Like [`publish`](Self::publish) but reports how many subscribers the
    /// event reached.
    pub fn try_publish(&self, event: ChangeEvent) -> Result<usize, NotifyError> {
        self.tx
            .send(event)
            .map_err(|e| NotifyError::NoSubscribers(e.0))
    }

    pub fn subscribe(&self, scope: SubscriptionScope) -> Subscription {
        debug!(?scope, "Subscribed");
        Subscription {
            scope,
            rx: self.tx.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// A live feed of events for one scope. Dropping it, or calling
/// [`unsubscribe`](Self::unsubscribe), ends the subscription.
#[derive(Debug)]
pub struct Subscription {
    scope: SubscriptionScope,
    rx: broadcast::Receiver<ChangeEvent>,
}

impl Subscription {
    pub fn scope(&self) -> SubscriptionScope {
        self.scope
    }

    /// Waits for the next event in scope.
    ///
    /// After [`SubscriptionError::Lagged`] the subscription keeps working from
    /// the oldest event still buffered.
    pub async fn recv(&mut self) -> Result<ChangeEvent, SubscriptionError> {
        loop {
            match self.rx.recv().await {
                Ok(event) if self.scope.matches(&event) => return Ok(event),
                Ok(_) => continue,
                Err(RecvError::Lagged(n)) => return Err(SubscriptionError::Lagged(n)),
                Err(RecvError::Closed) => return Err(SubscriptionError::Closed),
            }
        }
    }

    /// Returns the next buffered event in scope without waiting.
    pub fn try_recv(&mut self) -> Result<Option<ChangeEvent>, SubscriptionError> {
        loop {
            match self.rx.try_recv() {
                Ok(event) if self.scope.matches(&event) => return Ok(Some(event)),
                Ok(_) => continue,
                Err(TryRecvError::Empty) => return Ok(None),
                Err(TryRecvError::Lagged(n)) => return Err(SubscriptionError::Lagged(n)),
                Err(TryRecvError::Closed) => return Err(SubscriptionError::Closed),
            }
        }
    }

    /// The subscription as a stream. It ends when the notifier is gone and
    /// yields `Err(Lagged)` items in place of missed events.
    pub fn into_stream(self) -> impl Stream<Item = Result<ChangeEvent, SubscriptionError>> {
        stream::unfold(self, |mut sub| async move {
            match sub.recv().await {
                Err(SubscriptionError::Closed) => None,
                item => Some((item, sub)),
            }
        })
    }

    pub fn unsubscribe(self) {
        debug!(scope = ?self.scope, "Unsubscribed");
    }
}
