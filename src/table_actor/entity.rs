//! [`ActorEntity`] implementation for [`Table`].
//!
//! Every mutation of `current_order_id` happens here, inside the table
//! actor, and is followed by its [`ChangeEvent`] once it has succeeded.

use super::actions::{TableAction, TableActionResult};
use super::error::TableError;
use super::TableContext;
use crate::model::{OrderId, Table, TableCreate, TableId, TableUpdate};
use crate::notifier::ChangeEvent;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl ActorEntity for Table {
    type Id = TableId;
    type Create = TableCreate;
    type Update = TableUpdate;
    type Action = TableAction;
    type ActionResult = TableActionResult;
    type Context = TableContext;
    type Error = TableError;

    fn from_create_params(id: TableId, params: TableCreate) -> Result<Self, Self::Error> {
        if params.number == 0 || params.capacity == 0 {
            return Err(TableError::InvalidTable {
                number: params.number,
                capacity: params.capacity,
            });
        }
        Ok(Self::new(id, params.number, params.capacity))
    }

    /// Table numbers are unique.
    fn natural_key(&self) -> Option<String> {
        Some(self.number.to_string())
    }

    async fn on_update(&mut self, update: TableUpdate, _ctx: &TableContext) -> Result<(), Self::Error> {
        if update.capacity == 0 {
            return Err(TableError::InvalidTable {
                number: self.number,
                capacity: update.capacity,
            });
        }
        self.capacity = update.capacity;
        Ok(())
    }

    async fn on_delete(&self, _ctx: &TableContext) -> Result<(), Self::Error> {
        if self.is_booked() {
            return Err(TableError::Occupied(self.id));
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: TableAction,
        ctx: &TableContext,
    ) -> Result<TableActionResult, Self::Error> {
        match action {
            TableAction::TryBook(order_id) => {
                self.try_book(order_id)?;
                ctx.notifier.publish(ChangeEvent::TableBooked {
                    table_id: self.id,
                    order_id,
                });
                Ok(TableActionResult::TryBook(()))
            }
            TableAction::Release => {
                let changed = self.release();
                if changed {
                    ctx.notifier.publish(ChangeEvent::TableReleased { table_id: self.id });
                }
                Ok(TableActionResult::Release(changed))
            }
            TableAction::GenerateBill { cart, created_by } => {
                let bill = ctx.billing.generate(self, cart, created_by).await?;
                info!(table_id = %self.id, order_id = %bill.order_id, bill_id = %bill.id, total = %bill.total, "Bill generated");
                ctx.notifier.publish(ChangeEvent::TableBooked {
                    table_id: self.id,
                    order_id: bill.order_id,
                });
                ctx.notifier.publish(ChangeEvent::BillGenerated {
                    table_id: self.id,
                    order_id: bill.order_id,
                    bill_id: bill.id,
                });
                Ok(TableActionResult::GenerateBill(bill))
            }
            TableAction::ReleaseTable => {
                let outcome = ctx.release.run(self).await;
                if outcome.changed {
                    ctx.notifier.publish(ChangeEvent::TableReleased { table_id: self.id });
                }
                Ok(TableActionResult::ReleaseTable(outcome))
            }
        }
    }
}

impl Table {
    /// Compare-and-set: books the table only if it is available.
    pub(crate) fn try_book(&mut self, order_id: OrderId) -> Result<(), TableError> {
        if self.is_booked() {
            return Err(TableError::AlreadyBooked(self.id));
        }
        self.current_order_id = Some(order_id);
        Ok(())
    }

    /// Frees the table. Returns whether it was booked.
    pub(crate) fn release(&mut self) -> bool {
        self.current_order_id.take().is_some()
    }
}
