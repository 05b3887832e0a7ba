//! botpower CLI Library
//!
//! Implementation crate for the `botpower` binary: CLI argument definitions,
//! configuration resolution, and the HTTP client that talks to the PDU.
//! The wire-format logic (query building and response parsing) lives in
//! `botpower-core`.

/// CLI argument definitions.
pub mod cli;

/// HTTP client for the PDU's query-string API.
pub mod client;

/// Configuration types and resolution.
pub mod config;
