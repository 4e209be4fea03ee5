//! `yakshop-core` — shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model and the units the simulation counts in.

pub mod error;
pub mod units;

pub use error::{DomainError, DomainResult};
pub use units::{DAYS_PER_YEAR, Days, Litres, round_to};
