//! The real table actor running against scripted order and bill stores.
//!
//! These cover the failure paths of the workflows, which the real order and
//! bill actors never produce on their own.

use actor_framework::mock::MockClient;
use actor_framework::{ActorClient, FrameworkError};
use chrono::Utc;
use rust_decimal::Decimal;
use std::time::Duration;
use table_service::bill_actor::BillError;
use table_service::clients::{BillClient, OrderClient, TableClient};
use table_service::model::{
    ActorId, Bill, BillId, Cart, Order, OrderId, OrderLine, OrderStatus, PaymentStatus, Table,
    TableId, DEFAULT_TAX_RATE,
};
use table_service::notifier::{ChangeEvent, ChangeNotifier, SubscriptionScope};
use table_service::order_actor::{OrderActionResult, OrderError};
use table_service::table_actor::{TableContext, TableError};
use table_service::workflows::{BillGenerator, ReleaseWorkflow};

struct Harness {
    tables: TableClient,
    notifier: ChangeNotifier,
    order_mock: MockClient<Order>,
    bill_mock: MockClient<Bill>,
}

fn start() -> Harness {
    let order_mock = MockClient::<Order>::new();
    let bill_mock = MockClient::<Bill>::new();
    let orders = OrderClient::new(order_mock.client());
    let bills = BillClient::new(bill_mock.client());
    let notifier = ChangeNotifier::new(16);

    let (table_actor, tables) = table_service::table_actor::new(8);
    tokio::spawn(table_actor.run(TableContext {
        billing: BillGenerator::new(orders.clone(), bills, DEFAULT_TAX_RATE),
        release: ReleaseWorkflow::new(orders),
        notifier: notifier.clone(),
    }));

    Harness {
        tables,
        notifier,
        order_mock,
        bill_mock,
    }
}

fn lines() -> Vec<OrderLine> {
    vec![
        OrderLine::new("Paneer Handi", Decimal::from(280), 1),
        OrderLine::new("Naan", Decimal::from(40), 2),
    ]
}

fn cart() -> Cart {
    let mut cart = Cart::new();
    for line in lines() {
        cart.add_line(line.item_name, line.unit_price, line.quantity)
            .unwrap();
    }
    cart
}

fn committed(id: u32, table_id: TableId) -> Order {
    Order {
        id: OrderId(id),
        table_id,
        items: lines(),
        status: OrderStatus::SentToKitchen,
        created_at: Utc::now(),
        created_by: ActorId::new("waiter-1"),
    }
}

fn bill(id: u32, order_id: OrderId, table_id: TableId) -> Bill {
    Bill {
        id: BillId(id),
        order_id,
        table_id,
        items: lines(),
        subtotal: Decimal::new(36000, 2),
        tax: Decimal::new(1800, 2),
        total: Decimal::new(37800, 2),
        payment_status: PaymentStatus::Pending,
        created_at: Utc::now(),
    }
}

async fn booked_table(h: &mut Harness) -> Table {
    let table = h.tables.create_table(4, 6).await.unwrap();
    h.order_mock
        .expect_create()
        .return_ok(committed(1, table.id));
    h.bill_mock
        .expect_create()
        .return_ok(bill(1, OrderId(1), table.id));
    h.tables
        .generate_bill(table.id, cart(), ActorId::new("waiter-1"))
        .await
        .unwrap();
    table
}

#[tokio::test]
async fn test_bill_failure_rolls_back_order_and_booking() {
    let mut h = start();
    let table = h.tables.create_table(4, 6).await.unwrap();
    let mut events = h.notifier.subscribe(SubscriptionScope::All);

    h.order_mock
        .expect_create()
        .return_ok(committed(7, table.id));
    h.bill_mock
        .expect_create()
        .return_err(FrameworkError::EntityError(Box::new(
            BillError::InconsistentTotals("store refused".to_string()),
        )));
    h.order_mock.expect_delete(OrderId(7)).return_ok(());

    let result = h
        .tables
        .generate_bill(table.id, cart(), ActorId::new("waiter-1"))
        .await;
    assert!(matches!(
        result,
        Err(TableError::Bill(BillError::InconsistentTotals(_)))
    ));

    let table = h.tables.get(table.id).await.unwrap().unwrap();
    assert!(!table.is_booked());
    assert_eq!(events.try_recv(), Ok(None));

    h.order_mock.verify();
    h.bill_mock.verify();
}

#[tokio::test]
async fn test_lost_bill_store_rolls_back() {
    let mut h = start();
    let table = h.tables.create_table(2, 2).await.unwrap();

    h.order_mock
        .expect_create()
        .return_ok(committed(3, table.id));
    h.bill_mock
        .expect_create()
        .return_err(FrameworkError::ActorDropped);
    h.order_mock.expect_delete(OrderId(3)).return_ok(());

    let err = h
        .tables
        .generate_bill(table.id, cart(), ActorId::new("waiter-1"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        TableError::Bill(BillError::ActorCommunicationError(_))
    ));
    assert!(!h.tables.get(table.id).await.unwrap().unwrap().is_booked());

    h.order_mock.verify();
    h.bill_mock.verify();
}

#[tokio::test]
async fn test_failed_order_commit_touches_nothing_else() {
    let mut h = start();
    let table = h.tables.create_table(5, 4).await.unwrap();

    h.order_mock
        .expect_create()
        .return_err(FrameworkError::ActorClosed);

    let result = h
        .tables
        .generate_bill(table.id, cart(), ActorId::new("waiter-1"))
        .await;
    assert!(matches!(
        result,
        Err(TableError::Order(OrderError::ActorCommunicationError(_)))
    ));
    assert!(!h.tables.get(table.id).await.unwrap().unwrap().is_booked());

    // No bill was requested.
    h.order_mock.verify();
    h.bill_mock.verify();
}

#[tokio::test]
async fn test_booked_table_rolls_back_the_second_order() {
    let mut h = start();
    let table = booked_table(&mut h).await;
    h.order_mock
        .expect_create()
        .return_ok(committed(2, table.id));
    h.order_mock.expect_delete(OrderId(2)).return_ok(());

    let second = h
        .tables
        .generate_bill(table.id, cart(), ActorId::new("waiter-2"))
        .await;
    assert_eq!(second, Err(TableError::AlreadyBooked(table.id)));

    h.order_mock.verify();
    h.bill_mock.verify();
}

#[tokio::test]
async fn test_mark_served_failure_still_releases_table() {
    let mut h = start();
    let table = booked_table(&mut h).await;
    let mut events = h.notifier.subscribe(SubscriptionScope::Table(table.id));

    h.order_mock
        .expect_action(OrderId(1))
        .return_err(FrameworkError::Timeout(Duration::from_millis(50)));

    let outcome = h.tables.release_table(table.id).await.unwrap();
    assert!(outcome.changed);
    assert!(!outcome.order_served);
    assert_eq!(outcome.order_id, Some(OrderId(1)));

    assert!(!h.tables.get(table.id).await.unwrap().unwrap().is_booked());
    assert_eq!(
        events.try_recv(),
        Ok(Some(ChangeEvent::TableReleased { table_id: table.id }))
    );

    h.order_mock.verify();
    h.bill_mock.verify();
}

#[tokio::test]
async fn test_release_marks_order_served_once() {
    let mut h = start();
    let table = booked_table(&mut h).await;

    h.order_mock
        .expect_action(OrderId(1))
        .return_ok(OrderActionResult::MarkServed(()));

    let first = h.tables.release_table(table.id).await.unwrap();
    assert!(first.changed);
    assert!(first.order_served);

    // Already available: the order store is not asked again.
    let second = h.tables.release_table(table.id).await.unwrap();
    assert!(!second.changed);
    assert_eq!(second.order_id, None);

    h.order_mock.verify();
    h.bill_mock.verify();
}
