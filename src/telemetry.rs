//! Tracing setup for hosts that do not install their own subscriber.
//!
//! The geometry functions emit `trace!` events for every skipped annotation
//! value or hidden bar label and `debug!` events for skipped annotations and
//! degenerate layouts. They stay silent until a subscriber is installed.

/// Filter used when `RUST_LOG` is unset: this crate's debug events, warnings
/// from everything else.
pub const DEFAULT_FILTER: &str = "warn,chart_geom=debug";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with an explicit fallback filter, e.g.
/// `"chart_geom=trace"` to see every skipped datum.
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let Ok(fallback) = EnvFilter::try_new(fallback) else {
            return false;
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or(fallback);

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .without_time()
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
