//! # Generic Actor Server
//!
//! `ResourceActor` owns the store for one entity type and processes requests
//! one at a time. Because nothing else can touch the store, a read-check-write
//! inside a single handler is indivisible with respect to every other request,
//! which is what makes compare-and-set commands like "book this table if it is
//! free" safe without locks.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor (server) and a
///    cloneable [`ResourceClient`].
/// 2. **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3. **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Seat { id: u32, taken: bool }
/// #[derive(Debug)] struct SeatCreate;
/// #[derive(Debug)] struct SeatUpdate;
/// #[derive(Debug)] enum SeatAction { Take }
/// #[derive(Debug, thiserror::Error)] #[error("seat taken")] struct SeatTaken;
///
/// #[async_trait]
/// impl ActorEntity for Seat {
///     type Id = u32;
///     type Create = SeatCreate;
///     type Update = SeatUpdate;
///     type Action = SeatAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = SeatTaken;
///
///     fn from_create_params(id: u32, _: SeatCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, taken: false })
///     }
///     async fn on_update(&mut self, _: SeatUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: SeatAction, _: &()) -> Result<(), Self::Error> {
///         if self.taken { return Err(SeatTaken); }
///         self.taken = true;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Seat>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let seat = client.create(SeatCreate).await.unwrap();
///     assert!(client.perform_action(seat.id, SeatAction::Take).await.is_ok());
///     assert!(client.perform_action(seat.id, SeatAction::Take).await.is_err());
/// }
/// ```
///
/// # Implementation Details
///
/// * **Create**: allocates the next `u32` id, builds the entity, rejects a
///   duplicate [`natural_key`](ActorEntity::natural_key), runs `on_create`,
///   stores it and responds with a clone.
/// * **Update / Action**: runs the hook on the stored entity; on error the
///   entity is restored to its previous state.
/// * **Delete**: runs `on_delete`, then removes.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
    entity_type: &'static str,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the mailbox capacity; when it is full, client calls
    /// wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        // "Table" instead of "table_service::model::table::Table"
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
            entity_type,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// # Context Injection
    /// `context` is handed to every entity hook, so dependencies created after
    /// the actor (other clients, a notifier) are available inside handlers.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = self.entity_type;
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    self.handle_create(params, respond_to, &context).await;
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    self.handle_update(id, update, respond_to, &context).await;
                }
                ResourceRequest::Delete { id, respond_to } => {
                    self.handle_delete(id, respond_to, &context).await;
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    self.handle_action(id, action, respond_to, &context).await;
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn handle_create(&mut self, params: T::Create, respond_to: Response<T>, ctx: &T::Context) {
        let entity_type = self.entity_type;
        debug!(entity_type, ?params, "Create");
        let id = T::Id::from(self.next_id);
        self.next_id += 1;

        let mut item = match T::from_create_params(id.clone(), params) {
            Ok(item) => item,
            Err(e) => {
                warn!(entity_type, error = %e, "Create failed");
                let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                return;
            }
        };

        if let Some(key) = item.natural_key() {
            let taken = self
                .store
                .values()
                .any(|other| other.natural_key().as_deref() == Some(key.as_str()));
            if taken {
                warn!(entity_type, %key, "Create refused, key in use");
                let _ = respond_to.send(Err(FrameworkError::Conflict(key)));
                return;
            }
        }

        if let Err(e) = item.on_create(ctx).await {
            warn!(entity_type, error = %e, "on_create failed");
            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
            return;
        }

        self.store.insert(id.clone(), item.clone());
        info!(entity_type, %id, size = self.store.len(), "Created");
        let _ = respond_to.send(Ok(item));
    }

    async fn handle_update(
        &mut self,
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
        ctx: &T::Context,
    ) {
        let entity_type = self.entity_type;
        debug!(entity_type, %id, ?update, "Update");
        let Some(item) = self.store.get_mut(&id) else {
            warn!(entity_type, %id, "Not found");
            let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
            return;
        };

        let before = item.clone();
        match item.on_update(update, ctx).await {
            Ok(()) => {
                info!(entity_type, %id, "Updated");
                let _ = respond_to.send(Ok(item.clone()));
            }
            Err(e) => {
                *item = before;
                warn!(entity_type, %id, error = %e, "Update failed");
                let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
            }
        }
    }

    async fn handle_delete(&mut self, id: T::Id, respond_to: Response<()>, ctx: &T::Context) {
        let entity_type = self.entity_type;
        debug!(entity_type, %id, "Delete");
        let Some(item) = self.store.get(&id) else {
            warn!(entity_type, %id, "Not found");
            let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
            return;
        };

        if let Err(e) = item.on_delete(ctx).await {
            warn!(entity_type, %id, error = %e, "on_delete failed");
            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
            return;
        }
        self.store.remove(&id);
        info!(entity_type, %id, size = self.store.len(), "Deleted");
        let _ = respond_to.send(Ok(()));
    }

    async fn handle_action(
        &mut self,
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
        ctx: &T::Context,
    ) {
        let entity_type = self.entity_type;
        debug!(entity_type, %id, ?action, "Action");
        let Some(item) = self.store.get_mut(&id) else {
            warn!(entity_type, %id, "Not found");
            let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
            return;
        };

        let before = item.clone();
        let result = match item.handle_action(action, ctx).await {
            Ok(result) => {
                info!(entity_type, %id, "Action ok");
                Ok(result)
            }
            Err(e) => {
                *item = before;
                warn!(entity_type, %id, error = %e, "Action failed");
                Err(FrameworkError::EntityError(Box::new(e)))
            }
        };
        let _ = respond_to.send(result);
    }
}
