//! Observability for the cred engine.
//! `tracing` crate with `EnvFilter`, per-module log levels.

pub mod metrics;
pub mod setup;

pub use setup::{init_tracing, log_filter, DEFAULT_DIRECTIVES, LOG_ENV};
