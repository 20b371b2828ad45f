//! Log output on stderr via `tracing-subscriber`

use std::sync::OnceLock;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// Environment variable holding filter directives (e.g. `basesize=trace`)
pub const LOG_ENV: &str = "BASESIZE_LOG";

static FILTER: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

/// Install the subscriber
///
/// `BASESIZE_LOG` wins; otherwise warnings only, or debug with `--verbose`.
pub fn init(verbose: bool) {
    let filter = match std::env::var(LOG_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new(if verbose { "debug" } else { "warn" }),
    };
    let (filter, handle) = reload::Layer::new(filter);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
    {
        let _ = FILTER.set(handle);
    }
}

/// Raise the level to debug, unless filters were given explicitly
pub fn enable_debug() {
    if std::env::var_os(LOG_ENV).is_some() {
        return;
    }
    if let Some(handle) = FILTER.get() {
        let _ = handle.modify(|filter| *filter = EnvFilter::new("debug"));
    }
}
