//! Interco State - world-state access
//!
//! The hosting ledger platform owns persistence, consensus, and distribution.
//! This crate reduces it to a get/put byte interface that the ledger layer
//! consumes and tests can fake in memory.

pub mod error;
pub mod store;

pub use error::StateError;
pub use store::{MemoryStore, StateStore};
