//! Tracing setup for the command line front-ends and embedding applications.
//!
//! The library only emits `tracing` events. Nothing is printed unless a
//! subscriber is installed, either here or by the host application.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// `default_level` applies when `RUST_LOG` is not set.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing(default_level: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
            )
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_level;
        false
    }
}
