use actor_framework::tracing::setup_tracing;
use futures::StreamExt;
use rust_decimal::Decimal;
use table_service::config::ServiceConfig;
use table_service::lifecycle::TableSystem;
use table_service::model::{ActorId, Cart, Menu};
use table_service::notifier::SubscriptionScope;
use tracing::{error, info, Instrument};

fn house_menu() -> Menu {
    [
        ("Paneer Handi", 280),
        ("Butter Chicken", 320),
        ("Dal Makhani", 220),
        ("Naan", 40),
        ("Biryani", 350),
        ("Tandoori Roti", 30),
        ("Raita", 80),
        ("Gulab Jamun", 100),
    ]
    .into_iter()
    .map(|(name, price)| (name, Decimal::from(price)))
    .collect()
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ServiceConfig::from_env();
    info!(?config, "Starting table service demo");
    let system = TableSystem::new(config);

    for (number, capacity) in [(1, 2), (2, 4), (3, 4), (4, 6)] {
        system
            .table_client
            .create_table(number, capacity)
            .await
            .map_err(|e| e.to_string())?;
    }

    let (floor, tables) = system
        .connect(SubscriptionScope::All)
        .await
        .map_err(|e| e.to_string())?;
    info!(tables = tables.len(), "Floor snapshot loaded");

    let watcher = tokio::spawn(
        async move {
            let mut events = Box::pin(floor.into_stream());
            while let Some(event) = events.next().await {
                match event {
                    Ok(event) => info!(?event, "Floor changed"),
                    Err(e) => error!(error = %e, "Floor subscription interrupted"),
                }
            }
        }
        .instrument(tracing::info_span!("floor_watcher")),
    );

    let table = system
        .table_client
        .find_by_number(4)
        .await
        .map_err(|e| e.to_string())?
        .ok_or("table 4 missing")?;

    let menu = house_menu();
    let mut cart = Cart::new();
    cart.add_from_menu(&menu, "Paneer Handi", 1)
        .map_err(|e| e.to_string())?;
    cart.add_from_menu(&menu, "Naan", 1)
        .map_err(|e| e.to_string())?;
    cart.adjust_quantity("Naan", 1);

    let span = tracing::info_span!("billing", table = table.number);
    let bill = async {
        info!("Generating bill");
        system
            .table_client
            .generate_bill(table.id, cart, ActorId::new("waiter-1"))
            .await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    println!("Bill {} for table {}", bill.id, table.number);
    for line in &bill.items {
        println!(
            "  {:<14} {:>3} x {:>7} = {:>8}",
            line.item_name,
            line.quantity,
            line.unit_price,
            line.line_total().unwrap_or_default()
        );
    }
    println!("  subtotal {:>8}", bill.subtotal);
    println!("  tax      {:>8}", bill.tax);
    println!("  total    {:>8}", bill.total);

    system
        .bill_client
        .settle(bill.id)
        .await
        .map_err(|e| e.to_string())?;

    match system.table_client.release_table(table.id).await {
        Ok(outcome) if !outcome.order_served => {
            error!(?outcome, "Table released but order not marked served")
        }
        Ok(outcome) => info!(?outcome, "Table released"),
        Err(e) => error!(error = %e, "Release failed"),
    }

    system.shutdown().await?;
    // The notifier's last sender is gone, so the stream ends.
    watcher.await.map_err(|e| e.to_string())?;

    info!("Demo completed successfully");
    Ok(())
}
