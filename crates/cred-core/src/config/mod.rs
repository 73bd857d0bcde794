//! Configuration system for the cred engine.
//! TOML-based, layered resolution: overrides > env > TOML > defaults.
//! The engine reads no files; callers hand in TOML text.

pub mod cred_config;
pub mod propagation_config;
pub mod timeline_config;

pub use cred_config::{CredConfig, ProgrammaticOverrides};
pub use propagation_config::PropagationConfig;
pub use timeline_config::TimelineConfig;
