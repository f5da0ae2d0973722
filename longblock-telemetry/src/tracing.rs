//! Tracing subscriber initialization.
//!
//! Binaries call [`init_tracing`] once at startup and keep the returned [`LogFlusher`]
//! alive until exit. Tests call [`init_test_tracing`], which only emits output when
//! `ENABLE_TRACING` is set.

use std::io;
use std::sync::Once;

use longblock_config::{Environment, EnvironmentError};
use thiserror::Error;
use tracing::subscriber::{SetGlobalDefaultError, set_global_default};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "info";

/// Environment variable that turns on log output in tests.
const ENABLE_TEST_TRACING_ENV_NAME: &str = "ENABLE_TRACING";

static INIT_TEST_TRACING: Once = Once::new();

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TracingError {
    #[error("failed to determine runtime environment: {0}")]
    Environment(#[from] EnvironmentError),

    #[error("failed to redirect `log` records into tracing: {0}")]
    LogTracer(#[from] tracing_log::log::SetLoggerError),

    #[error("failed to install the tracing subscriber: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
}

/// Flushes buffered log lines when dropped.
///
/// Logs are written by a background thread, so the guard must outlive every
/// component that logs.
#[must_use = "dropping the flusher stops log output"]
#[derive(Debug)]
pub struct LogFlusher {
    _guard: WorkerGuard,
}

/// Installs the global tracing subscriber for the binary `app_name`.
///
/// Production emits flattened JSON lines tagged with the application name, development
/// emits human readable output. `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing(app_name: &str) -> Result<LogFlusher, TracingError> {
    let environment = Environment::load()?;

    tracing_log::LogTracer::init()?;

    let (writer, guard) = tracing_appender::non_blocking(io::stdout());
    let filter = env_filter();

    // The subscriber is installed with `set_global_default` since `try_init` would install a
    // second `LogTracer` and fail.
    match environment {
        Environment::Prod => set_global_default(
            tracing_subscriber::registry().with(filter).with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true)
                    .with_writer(writer),
            ),
        )?,
        Environment::Dev => set_global_default(
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().pretty().with_writer(writer)),
        )?,
    }

    tracing::info!(app = app_name, %environment, "tracing initialized");

    Ok(LogFlusher { _guard: guard })
}

/// Enables test output when `ENABLE_TRACING` is set, at most once per process.
pub fn init_test_tracing() {
    if std::env::var(ENABLE_TEST_TRACING_ENV_NAME).is_err() {
        return;
    }

    INIT_TEST_TRACING.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(env_filter())
            .with(fmt::layer().with_test_writer())
            .try_init();
    });
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}
