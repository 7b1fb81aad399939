//! # Order Client
//!
//! High-level API for the order ledger. It wraps a `ResourceClient<Order>`
//! and turns framework errors back into [`OrderError`].
use crate::model::{ActorId, Order, OrderCreate, OrderId, OrderLine, TableId};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// A copy of this client whose calls give up after `limit`.
    pub fn with_timeout(&self, limit: Duration) -> Self {
        Self::new(self.inner.clone().with_timeout(limit))
    }

    /// Stores the lines as a new order in status `sent_to_kitchen`. Does not
    /// book the table.
    #[instrument(skip(self, items), fields(lines = items.len()))]
    pub(crate) async fn commit(
        &self,
        table_id: TableId,
        items: Vec<OrderLine>,
        created_by: ActorId,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        let params = OrderCreate {
            table_id,
            items,
            created_by,
        };
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// `sent_to_kitchen` to `served`.
    #[instrument(skip(self))]
    pub async fn mark_served(&self, id: OrderId) -> Result<(), OrderError> {
        debug!("Sending request");
        match self.inner.perform_action(id, OrderAction::MarkServed).await {
            Ok(OrderActionResult::MarkServed(())) => Ok(()),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Deletes an order that was committed as part of a failed bill
    /// generation.
    #[instrument(skip(self))]
    pub(crate) async fn rollback(&self, id: OrderId) -> Result<(), OrderError> {
        debug!("Sending request");
        self.inner.delete(id).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}
