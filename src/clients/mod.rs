//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).

pub mod bill_client;
pub mod order_client;
pub mod table_client;

pub use bill_client::*;
pub use order_client::*;
pub use table_client::*;
