//! Interco Ledger - intercompany transaction store and reconciliation
//!
//! Records are stored under caller-supplied ids in the host's world state.
//! Reconciliation loads two records, checks that they are mirror legs of the
//! same transfer, and flags both as settled.
//!
//! # Key items
//! - `add_transaction`: parse the date, build a record, one overwriting write
//! - `query_transaction`: typed read of a stored record
//! - `match_transactions`: ordered matching predicate, then both write-backs
//! - `LedgerError`: closed error taxonomy callers can branch on

pub mod error;
pub mod ops;

pub use error::LedgerError;
pub use ops::{add_transaction, match_transactions, query_transaction};
