//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding `EnvFilter` directives.
pub const LOG_ENV: &str = "CRED_LOG";

/// Directives used when `CRED_LOG` is unset, empty or unparseable: engine
/// crates at `info`, everything else at `warn`.
pub const DEFAULT_DIRECTIVES: &str = "warn,cred_core=info,cred_analysis=info";

static INIT: Once = Once::new();

/// Filter for `directives`, falling back to [`DEFAULT_DIRECTIVES`].
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the global subscriber once, filtered by `CRED_LOG`
/// (e.g. `CRED_LOG=cred_analysis::timeline=debug`).
///
/// Interval spans are recorded per rayon worker, so thread ids are shown.
/// Does nothing if the host already installed a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let directives = std::env::var(LOG_ENV).ok();
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_thread_ids(true))
            .with(log_filter(directives.as_deref()))
            .try_init();
    });
}
