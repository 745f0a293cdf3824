//! Daily ticket sales ledger.
//!
//! This crate contains the append-only record of tickets sold on one calendar
//! day, implemented purely as deterministic domain logic (no IO, no storage).

pub mod daily;

pub use daily::DailySales;
