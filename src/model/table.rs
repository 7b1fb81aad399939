/// A restaurant table and its booking state.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Table`](#impl-ActorEntity-for-Table) for details on:
/// - Creation parameters ([`TableCreate`])
/// - Update parameters ([`TableUpdate`])
/// - Custom actions ([`TableAction`](crate::table_actor::TableAction))
use crate::model::OrderId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableId(pub u32);

impl From<u32> for TableId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "table_{}", self.0)
    }
}

/// A table is booked exactly when it references an order, so the two can
/// never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: TableId,
    /// The number printed on the table. Unique and fixed after creation.
    pub number: u32,
    pub capacity: u32,
    pub current_order_id: Option<OrderId>,
}

impl Table {
    pub fn new(id: TableId, number: u32, capacity: u32) -> Self {
        Self {
            id,
            number,
            capacity,
            current_order_id: None,
        }
    }

    pub fn is_booked(&self) -> bool {
        self.current_order_id.is_some()
    }
}

/// DTO for Table creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCreate {
    pub number: u32,
    pub capacity: u32,
}

/// DTO for Table updates. The table number cannot change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableUpdate {
    pub capacity: u32,
}
