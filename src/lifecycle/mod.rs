//! Startup and shutdown of the actor system.

mod table_system;

pub use table_system::TableSystem;
