//! [`ActorEntity`] implementation for [`Order`].
//!
//! The order store is a leaf: it has no dependencies (`Context = ()`).
//! Committed lines cannot be edited, which is why the update payload is
//! uninhabited.

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use crate::model::{validate_lines, Order, OrderCreate, OrderId, OrderStatus};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = Infallible;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = ();
    type Error = OrderError;

    /// Commits a cart: the order starts in the kitchen.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.items.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        validate_lines(&params.items).map_err(OrderError::InvalidLines)?;
        Ok(Self {
            id,
            table_id: params.table_id,
            items: params.items,
            status: OrderStatus::SentToKitchen,
            created_at: Utc::now(),
            created_by: params.created_by,
        })
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &(),
    ) -> Result<OrderActionResult, Self::Error> {
        match action {
            OrderAction::MarkServed => {
                self.advance(OrderStatus::Served)?;
                Ok(OrderActionResult::MarkServed(()))
            }
        }
    }
}

impl Order {
    fn advance(&mut self, to: OrderStatus) -> Result<(), OrderError> {
        if !self.status.can_transition_to(to) {
            return Err(OrderError::InvalidTransition {
                order_id: self.id,
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }
}
