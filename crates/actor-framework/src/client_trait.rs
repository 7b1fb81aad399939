//! # ActorClient Trait
//!
//! Provides a common interface for resource-specific clients, adding default
//! `get`, `list` and `delete` methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read and delete
/// operations.
///
/// # Example
///
/// A wrapper only supplies `inner` and `map_error`. Here the mapping turns an
/// expired bound into a domain error; the second half shows a bounded client
/// whose actor never answers.
///
/// ```rust
/// use actor_framework::mock::{create_mock_client, MockClient};
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
/// use std::convert::Infallible;
/// use std::time::Duration;
///
/// #[derive(Clone, Debug)]
/// struct Lamp { id: u32 }
///
/// #[derive(Debug, PartialEq, thiserror::Error)]
/// enum LampError {
///     #[error("lamp store did not answer in {0:?}")]
///     Slow(Duration),
///     #[error("{0}")]
///     Other(String),
/// }
///
/// impl From<String> for LampError {
///     fn from(s: String) -> Self { LampError::Other(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Lamp {
///     type Id = u32; type Create = (); type Update = Infallible;
///     type Action = Infallible; type ActionResult = (); type Context = (); type Error = LampError;
///     fn from_create_params(id: u32, _: ()) -> Result<Self, Self::Error> { Ok(Self { id }) }
///     async fn on_update(&mut self, u: Infallible, _: &()) -> Result<(), Self::Error> { match u {} }
///     async fn handle_action(&mut self, a: Infallible, _: &()) -> Result<(), Self::Error> { match a {} }
/// }
///
/// struct LampClient(ResourceClient<Lamp>);
///
/// #[async_trait]
/// impl ActorClient<Lamp> for LampClient {
///     type Error = LampError;
///
///     fn inner(&self) -> &ResourceClient<Lamp> { &self.0 }
///
///     fn map_error(e: FrameworkError) -> LampError {
///         match e {
///             FrameworkError::Timeout(limit) => LampError::Slow(limit),
///             other => LampError::Other(other.to_string()),
///         }
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let mut mock = MockClient::<Lamp>::new();
///     mock.expect_list().return_ok(vec![Lamp { id: 1 }, Lamp { id: 2 }]);
///     let lamps = LampClient(mock.client());
///     assert_eq!(lamps.list().await.unwrap().len(), 2);
///     mock.verify();
///
///     let (client, _unanswered) = create_mock_client::<Lamp>(4);
///     let lamps = LampClient(client.with_timeout(Duration::from_millis(10)));
///     assert_eq!(lamps.get(1).await.unwrap_err(), LampError::Slow(Duration::from_millis(10)));
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Snapshot of every entity the actor holds.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
