use crate::clients::{BillClient, OrderClient};
use crate::model::{ActorId, Bill, BillCreate, Cart, OrderId, Table};
use crate::table_actor::TableError;
use rust_decimal::Decimal;
use tracing::{debug, error, instrument, warn};

/// Commits a cart, books the table and creates the bill as one unit.
///
/// Steps, each compensated when a later one fails:
///
/// 1. Totals are computed up front, which also rejects an empty or
///    malformed cart.
/// 2. The order is committed to the order store.
/// 3. The table is booked for it. A booked table rolls the order back.
/// 4. The bill is created. A refusal releases the table and rolls the order
///    back.
///
/// The order and bill clients must not carry a timeout: a request that was
/// given up on is still applied by the store later, behind the compensation.
#[derive(Clone)]
pub struct BillGenerator {
    orders: OrderClient,
    bills: BillClient,
    tax_rate: Decimal,
}

impl BillGenerator {
    pub fn new(orders: OrderClient, bills: BillClient, tax_rate: Decimal) -> Self {
        Self {
            orders,
            bills,
            tax_rate,
        }
    }

    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    #[instrument(skip(self, table, cart), fields(table_id = %table.id, lines = cart.lines().len()))]
    pub async fn generate(
        &self,
        table: &mut Table,
        cart: Cart,
        created_by: ActorId,
    ) -> Result<Bill, TableError> {
        let totals = cart.checked_totals(self.tax_rate)?;

        let lines = cart.into_lines();
        let order = self
            .orders
            .commit(table.id, lines.clone(), created_by)
            .await?;
        debug!(order_id = %order.id, "Order committed");

        if let Err(e) = table.try_book(order.id) {
            warn!(order_id = %order.id, error = %e, "Booking lost, rolling back order");
            self.rollback(order.id).await;
            return Err(e);
        }

        let params = BillCreate {
            order_id: order.id,
            table_id: table.id,
            items: lines,
            totals,
        };
        match self.bills.create_bill(params).await {
            Ok(bill) => Ok(bill),
            Err(e) => {
                warn!(order_id = %order.id, error = %e, "Bill creation failed, compensating");
                table.release();
                self.rollback(order.id).await;
                Err(e.into())
            }
        }
    }

    async fn rollback(&self, order_id: OrderId) {
        if let Err(e) = self.orders.rollback(order_id).await {
            error!(%order_id, error = %e, "Compensation failed, order left orphaned");
        }
    }
}
