//! `museo-core` — domain building blocks for museum ticketing.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, the `Price` and `BusinessDate` value objects, the clock
//! abstraction used to stamp "today", and the shared ticket numbering sequence.

pub mod clock;
pub mod date;
pub mod error;
pub mod price;
pub mod sequence;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date::BusinessDate;
pub use error::{DomainError, DomainResult};
pub use price::Price;
pub use sequence::TicketSequence;
