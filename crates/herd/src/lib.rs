//! Herd domain module.
//!
//! Animals age one day at a time, are milked and shaved each morning, and are
//! culled once they reach the end of their lifespan. This crate is pure domain
//! logic plus the import of herd descriptions (no IO, no HTTP).

pub mod animal;
pub mod herd;
pub mod import;

pub use animal::{Animal, LIFESPAN, Sex};
pub use herd::{DailyYield, Herd};
pub use import::{AnimalDescription, HerdFormat, HerdImportError, parse_herd};
