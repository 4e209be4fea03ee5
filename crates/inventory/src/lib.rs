//! Inventory domain module.
//!
//! Holds the shop's stock of goods. All mutation goes through one
//! synchronized accessor per [`Stock`], so deposits from herd attendance and
//! withdrawals from concurrent orders never interleave mid-update.

pub mod stock;

pub use stock::{Good, InsufficientStock, Stock, StockSnapshot};
