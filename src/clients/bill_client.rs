//! # Bill Client
use crate::bill_actor::{BillAction, BillActionResult, BillError};
use crate::model::{Bill, BillCreate, BillId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

/// Client for interacting with the Bill actor.
#[derive(Clone)]
pub struct BillClient {
    inner: ResourceClient<Bill>,
}

impl BillClient {
    pub fn new(inner: ResourceClient<Bill>) -> Self {
        Self { inner }
    }

    /// A copy of this client whose calls give up after `limit`.
    pub fn with_timeout(&self, limit: Duration) -> Self {
        Self::new(self.inner.clone().with_timeout(limit))
    }

    #[instrument(skip(self, params), fields(order_id = %params.order_id))]
    pub async fn create_bill(&self, params: BillCreate) -> Result<Bill, BillError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Marks the bill paid.
    #[instrument(skip(self))]
    pub async fn settle(&self, id: BillId) -> Result<(), BillError> {
        debug!("Sending request");
        match self.inner.perform_action(id, BillAction::Settle).await {
            Ok(BillActionResult::Settle(())) => Ok(()),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl ActorClient<Bill> for BillClient {
    type Error = BillError;

    fn inner(&self) -> &ResourceClient<Bill> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        BillError::from(e)
    }
}
