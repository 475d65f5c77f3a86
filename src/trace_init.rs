#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Write JSON-lines traces to `log_dir/ethio-trace.jsonl`. Filtered by
/// `RUST_LOG`, defaulting to debug for this crate and the core.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, "ethio-trace.jsonl");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        // `trace_init` hands nothing back to the host, so no caller can own the
        // guard, and dropping it here would stop the writer thread. Leaked, it
        // flushes until the host process exits; lines still queued then are lost.
        std::mem::forget(guard);

        tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("ethio_intl=debug,ethio_core=debug")
                }),
            )
            .try_init()
            // The host may already have installed its own subscriber.
            .ok();
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}
