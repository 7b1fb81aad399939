/// An immutable bill for one order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// Only `payment_status` changes after creation, through
/// [`BillAction::Settle`](crate::bill_actor::BillAction::Settle).
use crate::model::{OrderId, OrderLine, TableId, Totals};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Bills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BillId(pub u32);

impl From<u32> for BillId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for BillId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "bill_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Settled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: BillId,
    pub order_id: OrderId,
    pub table_id: TableId,
    /// Copy of the order lines, so the bill can be rendered on its own.
    pub items: Vec<OrderLine>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

impl Bill {
    pub fn totals(&self) -> Totals {
        Totals {
            subtotal: self.subtotal,
            tax: self.tax,
            total: self.total,
        }
    }
}

/// Payload for creating a bill. The totals are computed by the caller and
/// checked against `items` on creation.
#[derive(Debug, Clone)]
pub struct BillCreate {
    pub order_id: OrderId,
    pub table_id: TableId,
    pub items: Vec<OrderLine>,
    pub totals: Totals,
}
