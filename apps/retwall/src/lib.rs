//! # Retwall - host library
//!
//! Everything around the pure calculator in `retwall-core`: the CLI, TOML
//! wall files and the HTTP API. The binary in `main.rs` is a thin entry
//! point; integration tests reach the API through `retwall::api`.

pub mod api;
pub mod cli;
pub mod config;
