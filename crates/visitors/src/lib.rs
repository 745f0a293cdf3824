//! Museum visitors.
//!
//! A visitor is a named person who may hold one ticket at a time.

pub mod visitor;

pub use visitor::Visitor;
