//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `log_level` is an `EnvFilter` directive string (the `RUST_LOG` value);
/// an unparsable value falls back to `info`. `log_format` selects
/// `json` output, anything else prints human-readable text.
pub fn init_tracing(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
