//! [`ActorEntity`] implementation for [`Bill`].

use super::actions::{BillAction, BillActionResult};
use super::error::BillError;
use crate::model::{subtotal_of, validate_lines, Bill, BillCreate, BillId, PaymentStatus};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Bill {
    type Id = BillId;
    type Create = BillCreate;
    type Update = Infallible;
    type Action = BillAction;
    type ActionResult = BillActionResult;
    type Context = ();
    type Error = BillError;

    /// Freezes the totals. The subtotal must match the lines and the total
    /// must be subtotal plus tax; the tax rate itself is the caller's.
    fn from_create_params(id: BillId, params: BillCreate) -> Result<Self, Self::Error> {
        let BillCreate {
            order_id,
            table_id,
            items,
            totals,
        } = params;

        if items.is_empty() {
            return Err(BillError::InconsistentTotals(format!("{order_id} has no lines")));
        }
        validate_lines(&items).map_err(|e| BillError::InconsistentTotals(e.to_string()))?;
        let expected =
            subtotal_of(&items).map_err(|e| BillError::InconsistentTotals(e.to_string()))?;
        if totals.subtotal != expected {
            return Err(BillError::InconsistentTotals(format!(
                "subtotal {} does not match lines {}",
                totals.subtotal, expected
            )));
        }
        if totals.subtotal.checked_add(totals.tax) != Some(totals.total) {
            return Err(BillError::InconsistentTotals(format!(
                "total {} is not {} + {}",
                totals.total, totals.subtotal, totals.tax
            )));
        }

        Ok(Self {
            id,
            order_id,
            table_id,
            items,
            subtotal: totals.subtotal,
            tax: totals.tax,
            total: totals.total,
            payment_status: PaymentStatus::Pending,
            created_at: Utc::now(),
        })
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: BillAction,
        _ctx: &(),
    ) -> Result<BillActionResult, Self::Error> {
        match action {
            BillAction::Settle => {
                if self.payment_status == PaymentStatus::Settled {
                    return Err(BillError::AlreadySettled(self.id));
                }
                self.payment_status = PaymentStatus::Settled;
                Ok(BillActionResult::Settle(()))
            }
        }
    }
}
