//! Key-value snapshot persistence for client state that must survive a
//! restart (the cart, the customer selection).
//!
//! The port is deliberately tiny: `load` once at startup, `save` after each
//! mutation. There is no cross-process synchronization; the in-memory copy
//! is authoritative for the session.

pub mod snapshot;

pub use snapshot::{InMemoryStore, JsonFileStore, SnapshotStore};
