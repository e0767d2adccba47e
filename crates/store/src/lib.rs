//! Store adapters for Cashup.
//!
//! The real record store and transaction feed are external collaborators;
//! this crate ships an in-memory adapter over the core's store ports for
//! tests, demos, and as the reference for wiring a database-backed adapter.

pub mod memory;

pub use memory::MemoryStore;
