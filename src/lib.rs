//! Core library for the `throughput` CLI.
//!
//! `throughput` fans a fixed number of HTTP GET requests out over a pool of
//! concurrent workers and prints one line per request. The crate exposes the
//! argument and config types, the worker orchestration, and the outcome sinks
//! the binary is assembled from.
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod sinks;
