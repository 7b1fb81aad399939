//! # Table Client
//!
//! The API terminals use: table setup, the booking primitives, bill
//! generation and release. Each call is one message to the table actor.
use crate::model::{ActorId, Bill, Cart, OrderId, Table, TableCreate, TableId, TableUpdate};
use crate::table_actor::{TableAction, TableActionResult, TableError};
use crate::workflows::ReleaseOutcome;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

/// Client for interacting with the Table actor.
#[derive(Clone)]
pub struct TableClient {
    inner: ResourceClient<Table>,
}

impl TableClient {
    pub fn new(inner: ResourceClient<Table>) -> Self {
        Self { inner }
    }

    /// A copy of this client whose calls give up after `limit`.
    pub fn with_timeout(&self, limit: Duration) -> Self {
        Self::new(self.inner.clone().with_timeout(limit))
    }

    #[instrument(skip(self))]
    pub async fn create_table(&self, number: u32, capacity: u32) -> Result<Table, TableError> {
        debug!("Sending request");
        self.inner
            .create(TableCreate { number, capacity })
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_capacity(&self, id: TableId, capacity: u32) -> Result<Table, TableError> {
        debug!("Sending request");
        self.inner
            .update(id, TableUpdate { capacity })
            .await
            .map_err(Self::map_error)
    }

    /// Removes an available table. Booked tables are refused with `Occupied`.
    pub async fn delete_table(&self, id: TableId) -> Result<(), TableError> {
        self.delete(id).await
    }

    /// Every table, ordered by table number.
    #[instrument(skip(self))]
    pub async fn list_tables(&self) -> Result<Vec<Table>, TableError> {
        let mut tables = self.list().await?;
        tables.sort_by_key(|t| t.number);
        Ok(tables)
    }

    #[instrument(skip(self))]
    pub async fn find_by_number(&self, number: u32) -> Result<Option<Table>, TableError> {
        let tables = self.list().await?;
        Ok(tables.into_iter().find(|t| t.number == number))
    }

    /// Books the table for `order_id` if, and only if, it is available.
    #[instrument(skip(self))]
    pub async fn try_book(&self, id: TableId, order_id: OrderId) -> Result<(), TableError> {
        debug!("Sending request");
        match self.action(id, TableAction::TryBook(order_id)).await? {
            TableActionResult::TryBook(()) => Ok(()),
            _ => unreachable!("TryBook action must return TryBook result"),
        }
    }

    /// Frees the table without touching its order. Returns whether the table
    /// was booked; releasing an available table is a successful no-op.
    #[instrument(skip(self))]
    pub async fn release(&self, id: TableId) -> Result<bool, TableError> {
        debug!("Sending request");
        match self.action(id, TableAction::Release).await? {
            TableActionResult::Release(changed) => Ok(changed),
            _ => unreachable!("Release action must return Release result"),
        }
    }

    /// Commits `cart` as an order for this table, books the table and
    /// creates the bill. Either all three happen or none does.
    ///
    /// # Errors
    /// - `Cart(EmptyCart)` for an empty cart
    /// - `AlreadyBooked` if the table holds an order
    /// - `Order(..)` / `Bill(..)` if a store refused or timed out
    /// - `PersistenceTimeout` if the table actor did not answer in time; the
    ///   outcome is unknown, re-read the table before retrying
    #[instrument(skip(self, cart), fields(lines = cart.lines().len()))]
    pub async fn generate_bill(
        &self,
        id: TableId,
        cart: Cart,
        created_by: ActorId,
    ) -> Result<Bill, TableError> {
        debug!("Sending request");
        match self
            .action(id, TableAction::GenerateBill { cart, created_by })
            .await?
        {
            TableActionResult::GenerateBill(bill) => Ok(bill),
            _ => unreachable!("GenerateBill action must return GenerateBill result"),
        }
    }

    /// Marks the current order served and frees the table. Idempotent.
    #[instrument(skip(self))]
    pub async fn release_table(&self, id: TableId) -> Result<ReleaseOutcome, TableError> {
        debug!("Sending request");
        match self.action(id, TableAction::ReleaseTable).await? {
            TableActionResult::ReleaseTable(outcome) => Ok(outcome),
            _ => unreachable!("ReleaseTable action must return ReleaseTable result"),
        }
    }

    async fn action(&self, id: TableId, action: TableAction) -> Result<TableActionResult, TableError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Table> for TableClient {
    type Error = TableError;

    fn inner(&self) -> &ResourceClient<Table> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        TableError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CartError;
    use actor_framework::mock::{create_mock_client, expect_action, MockClient};

    #[tokio::test]
    async fn test_try_book_sends_the_order_id() {
        let (client, mut receiver) = create_mock_client::<Table>(10);
        let tables = TableClient::new(client);

        let task = tokio::spawn(async move { tables.try_book(TableId(4), OrderId(9)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, TableId(4));
        assert!(matches!(action, TableAction::TryBook(OrderId(9))));
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                TableError::AlreadyBooked(TableId(4)),
            ))))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(TableError::AlreadyBooked(TableId(4)))
        );
    }

    #[tokio::test]
    async fn test_nested_errors_survive_the_channel() {
        let mut mock = MockClient::<Table>::new();
        mock.expect_action(TableId(1))
            .return_err(FrameworkError::EntityError(Box::new(TableError::Cart(
                CartError::EmptyCart,
            ))));
        mock.expect_action(TableId(1))
            .return_err(FrameworkError::Timeout(Duration::from_millis(10)));

        let tables = TableClient::new(mock.client());
        let empty = tables
            .generate_bill(TableId(1), Cart::new(), ActorId::new("w"))
            .await;
        assert_eq!(empty, Err(TableError::Cart(CartError::EmptyCart)));

        let slow = tables.release_table(TableId(1)).await.unwrap_err();
        assert!(slow.is_timeout());

        mock.verify();
    }

    #[tokio::test]
    async fn test_list_tables_is_sorted_by_number() {
        let mut mock = MockClient::<Table>::new();
        mock.expect_list().return_ok(vec![
            Table::new(TableId(1), 7, 4),
            Table::new(TableId(2), 2, 2),
            Table::new(TableId(3), 5, 6),
        ]);
        mock.expect_list().return_ok(vec![Table::new(TableId(3), 5, 6)]);

        let tables = TableClient::new(mock.client());
        let numbers: Vec<u32> = tables
            .list_tables()
            .await
            .unwrap()
            .iter()
            .map(|t| t.number)
            .collect();
        assert_eq!(numbers, vec![2, 5, 7]);

        let found = tables.find_by_number(5).await.unwrap();
        assert_eq!(found.map(|t| t.id), Some(TableId(3)));

        mock.verify();
    }

    #[tokio::test]
    async fn test_duplicate_number_maps_from_conflict() {
        let mut mock = MockClient::<Table>::new();
        mock.expect_create()
            .return_err(FrameworkError::Conflict("4".to_string()));

        let tables = TableClient::new(mock.client());
        assert_eq!(
            tables.create_table(4, 2).await,
            Err(TableError::DuplicateNumber(4))
        );
        mock.verify();
    }
}
