//! Core business logic module
//!
//! This module contains the orchestration layer over the domain types:
//! - `bank` - client registry, account allocation, and the operations the
//!   shell calls
//! - `statement` - read-only statement view and its rendering

pub mod bank;
pub mod statement;

pub use bank::Bank;
pub use statement::Statement;
