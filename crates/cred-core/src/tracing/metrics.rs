//! Span names used across the engine.
//!
//! Consistent names keep log queries stable across releases.

/// Span: one full propagation run.
pub const PROPAGATION_SPAN: &str = "cred.propagation";

/// Span: one timeline decomposition.
pub const TIMELINE_SPAN: &str = "cred.timeline";

/// Span: one interval inside a timeline.
pub const INTERVAL_SPAN: &str = "cred.interval";
