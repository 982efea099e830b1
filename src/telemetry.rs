//! Tracing setup, called once by the binary entry point.

use tracing::Subscriber;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::AgentError;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "domain_agent=info";

/// Build the subscriber the binary installs: `filter` plus a formatted
/// layer writing to `writer`.
///
/// Span closes are logged, so every domain lookup shows up with its
/// recorded fields and timing even when nothing inside it emits an event.
pub fn subscriber<W>(
    filter: EnvFilter,
    writer: W,
    ansi: bool,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(writer)
            .with_ansi(ansi)
            .with_span_events(FmtSpan::CLOSE),
    )
}

/// Install the global subscriber: `RUST_LOG` (or `default_filter`) with a
/// formatted layer on stderr, leaving stdout for replies.
///
/// Fails if a global subscriber is already set.
pub fn init_tracing(default_filter: &str) -> Result<(), AgentError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    subscriber(filter, std::io::stderr, true)
        .try_init()
        .map_err(|e| AgentError::Configuration(format!("Failed to initialize tracing: {e}")))
}
