//! Shop module: the simulation context and the order protocol on top of it.
//!
//! A [`Shop`] binds a day counter to one herd and one stock. Every query or
//! order names a day; the shop first simulates up to that day, then serves
//! the request from the resulting state.

pub mod order;
pub mod report;
pub mod shop;

pub use order::{Fulfillment, FulfillmentStatus, Order, OrderedGoods};
pub use report::{AnimalReport, HerdReport, StockReport};
pub use shop::Shop;
