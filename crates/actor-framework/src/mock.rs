//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are
//! answered from a queue of expectations instead of an actor. Tests script the
//! replies, including failures that are hard to provoke with real actors, and
//! call [`MockClient::verify`] at the end.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, replies are scripted | Real state management |
//! | **Use Case** | Logic *around* the client | The actor itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Testing Strategies
//!
//! <details>
//! <summary><b>Pattern 0: Client Logic Test (Pure Mock)</b></summary>
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Seat { id: u32, label: String }
//! #[derive(Debug)] struct SeatCreate { label: String }
//! #[derive(Debug)] struct SeatUpdate;
//! #[derive(Debug)] enum SeatAction {}
//! #[derive(Debug, thiserror::Error)] #[error("seat error")] struct SeatError;
//!
//! #[async_trait]
//! impl ActorEntity for Seat {
//!     type Id = u32; type Create = SeatCreate; type Update = SeatUpdate;
//!     type Action = SeatAction; type ActionResult = (); type Context = (); type Error = SeatError;
//!     fn from_create_params(id: u32, params: SeatCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, label: params.label })
//!     }
//!     async fn on_update(&mut self, _: SeatUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: SeatAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Seat>::new();
//!     mock.expect_get(1).return_ok(Some(Seat { id: 1, label: "window".into() }));
//!     mock.expect_delete(1).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(1).await.unwrap().unwrap().label, "window");
//!     assert!(matches!(client.delete(1).await, Err(FrameworkError::ActorClosed)));
//!
//!     mock.verify();
//! }
//! ```
//! </details>
//!
//! <details>
//! <summary><b>Pattern 1: Actor with Mocked Dependencies</b></summary>
//!
//! Run the real actor under test and pass `MockClient` handles as its
//! context. See `tests/table_actor_test.rs` in the `table-service` crate,
//! where the table actor runs against scripted order and bill stores.
//! </details>
//!
//! <details>
//! <summary><b>Pattern 2: Full System Integration Test</b></summary>
//!
//! Start every actor and drive the system through its public clients. See
//! `tests/integration_test.rs` in the `table-service` crate.
//! </details>
//!
//! ## Mocking Utilities
//!
//! For step-by-step control use [`create_mock_client`] and answer each
//! request by hand with [`expect_create`] or [`expect_action`]. Leaving a
//! request unanswered is the simplest way to exercise client timeouts.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// The scripted reply, one variant per request kind.
enum Reply<T: ActorEntity> {
    Get(Result<Option<T>, FrameworkError>),
    List(Result<Vec<T>, FrameworkError>),
    Create(Result<T, FrameworkError>),
    Update(Result<T, FrameworkError>),
    Delete(Result<(), FrameworkError>),
    Action(Result<T::ActionResult, FrameworkError>),
}

impl<T: ActorEntity> Reply<T> {
    fn kind(&self) -> &'static str {
        match self {
            Reply::Get(_) => "get",
            Reply::List(_) => "list",
            Reply::Create(_) => "create",
            Reply::Update(_) => "update",
            Reply::Delete(_) => "delete",
            Reply::Action(_) => "action",
        }
    }
}

struct Expectation<T: ActorEntity> {
    /// `None` for requests that carry no id (create, list).
    id: Option<T::Id>,
    reply: Reply<T>,
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;
type Failures = Arc<Mutex<Vec<String>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next
/// expectation (wrong kind or wrong id) gets no reply, so the caller sees
/// [`FrameworkError::ActorDropped`], and the mismatch is reported by
/// [`verify`](Self::verify).
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    failures: Failures,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside
    /// a Tokio runtime.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let failures: Failures = Arc::new(Mutex::new(Vec::new()));

        let handle = tokio::spawn(answer_requests(
            receiver,
            expectations.clone(),
            failures.clone(),
        ));

        Self {
            client: ResourceClient::new(sender),
            expectations,
            failures,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Some(id), Reply::Get)
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(None, Reply::List)
    }

    /// Expects a `create` operation. The reply is the stored entity.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(None, Reply::Create)
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(Some(id), Reply::Update)
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(Some(id), Reply::Delete)
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(Some(id), Reply::Action)
    }

    /// Panics if an expectation was not consumed or a request did not match.
    pub fn verify(&self) {
        let failures = self.failures.lock().unwrap_or_else(PoisonError::into_inner);
        if !failures.is_empty() {
            panic!("Unexpected requests: {}", failures.join("; "));
        }
        let exps = self
            .expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if !exps.is_empty() {
            let pending: Vec<&str> = exps.iter().map(|e| e.reply.kind()).collect();
            panic!(
                "Not all expectations were met. {} remaining: {}",
                exps.len(),
                pending.join(", ")
            );
        }
    }

    fn builder<R>(
        &self,
        id: Option<T::Id>,
        wrap: fn(Result<R, FrameworkError>) -> Reply<T>,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            id,
            wrap,
            expectations: self.expectations.clone(),
        }
    }
}

/// Builder returned by the `expect_*` methods. Finish it with
/// [`return_ok`](Self::return_ok) or [`return_err`](Self::return_err).
pub struct ExpectationBuilder<T: ActorEntity, R> {
    id: Option<T::Id>,
    wrap: fn(Result<R, FrameworkError>) -> Reply<T>,
    expectations: Expectations<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let mut exps = self
            .expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        exps.push_back(Expectation {
            id: self.id,
            reply: (self.wrap)(response),
        });
    }
}

async fn answer_requests<T: ActorEntity>(
    mut receiver: mpsc::Receiver<ResourceRequest<T>>,
    expectations: Expectations<T>,
    failures: Failures,
) {
    while let Some(request) = receiver.recv().await {
        let next = expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();

        if let Err(failure) = answer(request, next) {
            failures
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(failure);
        }
    }
}

/// Sends the scripted reply, or describes why the request did not match.
/// Returning early drops the responder.
fn answer<T: ActorEntity>(
    request: ResourceRequest<T>,
    expected: Option<Expectation<T>>,
) -> Result<(), String> {
    let requested = describe(&request);
    let Some(expected) = expected else {
        return Err(format!("{requested} with no expectation left"));
    };
    if let Some(id) = &expected.id {
        if request_id(&request) != Some(id) {
            return Err(format!("{requested}, expected {} on {id}", expected.reply.kind()));
        }
    }

    match (request, expected.reply) {
        (ResourceRequest::Get { respond_to, .. }, Reply::Get(r)) => {
            let _ = respond_to.send(r);
        }
        (ResourceRequest::List { respond_to }, Reply::List(r)) => {
            let _ = respond_to.send(r);
        }
        (ResourceRequest::Create { respond_to, .. }, Reply::Create(r)) => {
            let _ = respond_to.send(r);
        }
        (ResourceRequest::Update { respond_to, .. }, Reply::Update(r)) => {
            let _ = respond_to.send(r);
        }
        (ResourceRequest::Delete { respond_to, .. }, Reply::Delete(r)) => {
            let _ = respond_to.send(r);
        }
        (ResourceRequest::Action { respond_to, .. }, Reply::Action(r)) => {
            let _ = respond_to.send(r);
        }
        (_, reply) => return Err(format!("{requested}, expected {}", reply.kind())),
    }
    Ok(())
}

fn request_id<T: ActorEntity>(request: &ResourceRequest<T>) -> Option<&T::Id> {
    match request {
        ResourceRequest::Get { id, .. }
        | ResourceRequest::Update { id, .. }
        | ResourceRequest::Delete { id, .. }
        | ResourceRequest::Action { id, .. } => Some(id),
        ResourceRequest::Create { .. } | ResourceRequest::List { .. } => None,
    }
}

fn describe<T: ActorEntity>(request: &ResourceRequest<T>) -> String {
    match request {
        ResourceRequest::Create { params, .. } => format!("create {params:?}"),
        ResourceRequest::Get { id, .. } => format!("get {id}"),
        ResourceRequest::List { .. } => "list".to_string(),
        ResourceRequest::Update { id, update, .. } => format!("update {id} {update:?}"),
        ResourceRequest::Delete { id, .. } => format!("delete {id}"),
        ResourceRequest::Action { id, action, .. } => format!("action {id} {action:?}"),
    }
}

// =============================================================================
// STEP-BY-STEP HELPERS
// =============================================================================

/// Creates a client and the receiving end of its mailbox.
///
/// The test plays the actor: it pulls each request off `receiver`, asserts on
/// it, and answers (or deliberately does not answer) through the responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
