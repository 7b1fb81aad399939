/// An order committed to the kitchen for one table.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Custom actions ([`OrderAction`](crate::order_actor::OrderAction))
use crate::model::TableId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Opaque identity of whoever placed the order (a waiter's user id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub String);

impl ActorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One menu item on an order: unit price and a positive quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item_name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(item_name: impl Into<String>, unit_price: Decimal, quantity: u32) -> Self {
        Self {
            item_name: item_name.into(),
            unit_price,
            quantity,
        }
    }

    /// Unrounded `unit_price * quantity`, or `None` if it does not fit in a
    /// `Decimal`.
    pub fn line_total(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }
}

/// Kitchen progress of an order. Moves forward one step at a time.
///
/// `Pending` is the draft stage that lives in the terminal's cart; a stored
/// order starts at `SentToKitchen`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    SentToKitchen,
    Served,
}

impl OrderStatus {
    /// The only status this one may move to, if any.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::SentToKitchen),
            OrderStatus::SentToKitchen => Some(OrderStatus::Served),
            OrderStatus::Served => None,
        }
    }

    pub fn can_transition_to(self, to: OrderStatus) -> bool {
        self.next() == Some(to)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::SentToKitchen => "sent_to_kitchen",
            OrderStatus::Served => "served",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub table_id: TableId,
    pub items: Vec<OrderLine>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub created_by: ActorId,
}

/// Payload for committing a cart as an order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub table_id: TableId,
    pub items: Vec<OrderLine>,
    pub created_by: ActorId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_moves_one_step_forward() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::SentToKitchen));
        assert!(OrderStatus::SentToKitchen.can_transition_to(OrderStatus::Served));

        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Served));
        assert!(!OrderStatus::Served.can_transition_to(OrderStatus::SentToKitchen));
        assert!(!OrderStatus::Served.can_transition_to(OrderStatus::Served));
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(OrderStatus::SentToKitchen.to_string(), "sent_to_kitchen");
        let json = serde_json::to_string(&OrderStatus::SentToKitchen).unwrap();
        assert_eq!(json, "\"sent_to_kitchen\"");
    }
}
