//! botpower Core Library
//!
//! Shared types and wire-format logic for the botpower PDU control tool.
//! This crate knows how to build the device's query strings and how to parse
//! its status responses; it performs no I/O of its own.

pub mod error;
pub mod query;
pub mod status;
pub mod types;

// Re-export commonly used items
pub use error::*;
pub use query::{outlet_params, setpower_query, GETPOWER_QUERY};
pub use status::{extract_outlets, parse_status};
pub use types::*;
