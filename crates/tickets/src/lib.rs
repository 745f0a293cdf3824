//! Museum entry tickets.
//!
//! This crate contains the ticket entity, implemented purely as deterministic
//! domain logic (no IO, no storage). Numbering comes from a `TicketSequence`
//! and the issuance day from a `Clock`, both injectable.

pub mod ticket;

pub use ticket::Ticket;
