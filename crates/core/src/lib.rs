//! Interco Core - Domain types
//!
//! This crate contains the fundamental types used across Interco:
//! - `TransactionRecord`: one leg of an intercompany transfer
//! - `parse_transaction_date`: parser for the `YYYY-MM-DD` input format

pub mod record;

pub use record::{parse_transaction_date, DateFormatError, TransactionRecord, DATE_FORMAT};
