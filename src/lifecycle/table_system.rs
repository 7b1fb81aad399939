use crate::clients::{BillClient, OrderClient, TableClient};
use crate::config::ServiceConfig;
use crate::model::{Order, OrderId, Table};
use crate::order_actor::OrderError;
use actor_framework::ActorClient;
use crate::notifier::{ChangeNotifier, Subscription, SubscriptionScope};
use crate::table_actor::{TableContext, TableError};
use crate::workflows::{BillGenerator, ReleaseWorkflow};
use tracing::{error, info};

/// Owns the three actors and hands out their clients.
///
/// # Wiring
///
/// ```text
/// TableActor ──▶ OrderActor
///     │
///     └────────▶ BillActor
/// ```
///
/// The order and bill actors have no dependencies (`Context = ()`). The
/// table actor receives a [`TableContext`] holding its own unbounded clients
/// to both, plus the [`ChangeNotifier`]. The public clients are bounded by
/// `request_timeout`.
///
/// Orders are created and deleted only by bill generation. Callers get
/// read access through [`order`](Self::order) and [`orders`](Self::orders).
///
/// # Example
///
/// ```no_run
/// use table_service::config::ServiceConfig;
/// use table_service::lifecycle::TableSystem;
///
/// # async fn demo() -> Result<(), String> {
/// let system = TableSystem::new(ServiceConfig::default());
/// let table = system.table_client.create_table(4, 6).await.map_err(|e| e.to_string())?;
/// assert!(!table.is_booked());
/// system.shutdown().await
/// # }
/// ```
pub struct TableSystem {
    pub table_client: TableClient,
    order_client: OrderClient,
    pub bill_client: BillClient,
    pub notifier: ChangeNotifier,
    config: ServiceConfig,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl TableSystem {
    /// Spawns the actors. Must be called inside a Tokio runtime.
    pub fn new(config: ServiceConfig) -> Self {
        let (order_actor, order_client) = crate::order_actor::new(config.mailbox_size);
        let (bill_actor, bill_client) = crate::bill_actor::new(config.mailbox_size);
        let (table_actor, table_client) = crate::table_actor::new(config.mailbox_size);
        let notifier = ChangeNotifier::new(config.event_capacity);

        let ctx = TableContext {
            billing: BillGenerator::new(order_client.clone(), bill_client.clone(), config.tax_rate),
            release: ReleaseWorkflow::new(order_client.clone()),
            notifier: notifier.clone(),
        };

        // The table actor goes first: it holds the only other senders to the
        // order and bill actors, so those close after it during shutdown.
        let handles = vec![
            tokio::spawn(table_actor.run(ctx)),
            tokio::spawn(order_actor.run(())),
            tokio::spawn(bill_actor.run(())),
        ];
        info!(
            mailbox_size = config.mailbox_size,
            request_timeout_ms = config.request_timeout.as_millis() as u64,
            tax_rate = %config.tax_rate,
            "Table system started"
        );

        Self {
            table_client: table_client.with_timeout(config.request_timeout),
            order_client: order_client.with_timeout(config.request_timeout),
            bill_client: bill_client.with_timeout(config.request_timeout),
            notifier,
            config,
            handles,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub async fn order(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        self.order_client.get(id).await
    }

    /// Every committed order, for audit and reconciliation.
    pub async fn orders(&self) -> Result<Vec<Order>, OrderError> {
        self.order_client.list().await
    }

    /// Live events for `scope`. There is no replay; pair with a snapshot
    /// (see [`connect`](Self::connect)).
    pub fn subscribe(&self, scope: SubscriptionScope) -> Subscription {
        self.notifier.subscribe(scope)
    }

    /// Subscribes, then reads the current tables in `scope`.
    ///
    /// Subscribing first means any change committed after the snapshot was
    /// taken shows up as an event; a change that lands in between may be
    /// seen twice, never missed.
    pub async fn connect(
        &self,
        scope: SubscriptionScope,
    ) -> Result<(Subscription, Vec<Table>), TableError> {
        let subscription = self.subscribe(scope);
        let tables = self
            .table_client
            .list_tables()
            .await?
            .into_iter()
            .filter(|t| match scope {
                SubscriptionScope::All => true,
                SubscriptionScope::Table(id) => t.id == id,
            })
            .collect();
        Ok((subscription, tables))
    }

    /// Drops the clients and waits for every actor to drain its mailbox.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down table system...");

        drop(self.table_client);
        drop(self.order_client);
        drop(self.bill_client);
        drop(self.notifier);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Table system shutdown complete.");
        Ok(())
    }
}
