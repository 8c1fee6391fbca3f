//! Structured logging initialization for host applications.
//!
//! The gating core emits `tracing` events and spans; the embedding
//! application decides once, at startup, how they are rendered.

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Log format configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty format for development.
    Pretty,
    /// JSON format for production log aggregation.
    Json,
}

impl LogFormat {
    /// Determines log format from the `LOG_FORMAT` environment variable:
    /// `json` selects JSON, anything else (or unset) selects pretty.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT").unwrap_or_default().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Initializes structured logging for the process.
///
/// Configures tracing-subscriber with the chosen output format, span close
/// events for fetch timing, and `RUST_LOG`-based level filtering (default:
/// `info`).
///
/// Call once at startup; a second call is a no-op if a global subscriber is
/// already set.
pub fn init_observability(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Json => {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_span_events(FmtSpan::CLOSE))
                .try_init();
        }
        LogFormat::Pretty => {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_span_events(FmtSpan::CLOSE))
                .try_init();
        }
    }
}
