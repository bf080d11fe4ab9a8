//! In-memory income/expense ledger with a terminal front end.
//!
//! [`store::LedgerStore`] holds the data; everything under [`view`] and
//! [`shell`] is a projection of it.

pub mod config;
pub mod error;
pub mod models;
pub mod operations;
pub mod shell;
pub mod store;
pub mod telemetry;
pub mod view;
