use crate::clients::OrderClient;
use crate::model::{OrderId, OrderStatus, Table, TableId};
use crate::order_actor::OrderError;
use serde::Serialize;
use tracing::{instrument, warn};

/// What a release did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseOutcome {
    pub table_id: TableId,
    /// The order the table held, if any.
    pub order_id: Option<OrderId>,
    /// False when the order could not be marked served. The table is free
    /// regardless.
    pub order_served: bool,
    /// False when the table was already available.
    pub changed: bool,
}

/// Marks the table's order served and frees the table.
///
/// The table is freed even when the order store refuses or times out; the
/// failure is logged and reported through [`ReleaseOutcome::order_served`].
#[derive(Clone)]
pub struct ReleaseWorkflow {
    orders: OrderClient,
}

impl ReleaseWorkflow {
    pub fn new(orders: OrderClient) -> Self {
        Self { orders }
    }

    #[instrument(skip(self, table), fields(table_id = %table.id))]
    pub async fn run(&self, table: &mut Table) -> ReleaseOutcome {
        let order_id = table.current_order_id;
        let order_served = match order_id {
            Some(id) => match self.orders.mark_served(id).await {
                Ok(()) => true,
                Err(OrderError::InvalidTransition {
                    from: OrderStatus::Served,
                    ..
                }) => true,
                Err(e) => {
                    warn!(order_id = %id, error = %e, "Could not mark order served, releasing anyway");
                    false
                }
            },
            None => false,
        };

        ReleaseOutcome {
            table_id: table.id,
            order_id,
            order_served,
            changed: table.release(),
        }
    }
}
