//! # Observability & Tracing
//!
//! Every actor logs its lifecycle (start, create, update, delete, action,
//! shutdown) with an `entity_type` field, and the typed clients wrap each call
//! in an `#[instrument]` span, so one request can be followed from the caller
//! into the actor that served it.
//!
//! ## Usage
//!
//! ```bash
//! # Lifecycle events only
//! RUST_LOG=info cargo run
//!
//! # Full payloads and every read
//! RUST_LOG=debug cargo run
//!
//! # Only the framework
//! RUST_LOG=actor_framework=debug cargo run
//! ```
//!
//! Module paths are hidden (`with_target(false)`); the `entity_type` field
//! already names the actor.

/// Installs the global `fmt` subscriber, filtered by `RUST_LOG`.
///
/// Calling it again is harmless: later calls leave the first subscriber in
/// place, which lets every test call it.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
