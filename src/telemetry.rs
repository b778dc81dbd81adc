//! Telemetry helpers for applications embedding `stock-chart`.
//!
//! Tracing setup stays explicit and opt-in. Hosts either call one of the
//! helpers below or install their own subscriber; the chart only emits
//! events through `tracing` macros (dataset loads, animation schedule
//! start/cancel, tooltip transitions).

/// Default filter directive used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER_DIRECTIVE: &str = "info";

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_FILTER_DIRECTIVE)
}

/// Same as [`init_default_tracing`] but with a caller-chosen fallback filter,
/// e.g. `"stock_chart=trace"` to follow every animation tick.
#[must_use]
pub fn init_tracing_with_fallback(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive)),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
