//! Structured logging.
//!
//! # Responsibilities
//! - Build the service logger from the configured format
//! - Run code with the logger as the active dispatcher
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - The logger is an explicit handle; no global subscriber is installed
//! - Level filtering comes from `RUST_LOG`, defaulting to `info`

use std::future::Future;

use tracing::instrument::{WithDispatch, WithSubscriber};
use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;

const DEFAULT_FILTER: &str = "info";

/// Handle to the service logger.
///
/// Cloning is cheap; every clone writes to the same subscriber.
#[derive(Clone, Debug)]
pub struct Logger {
    dispatch: Dispatch,
}

impl Logger {
    /// Logger writing to stdout, filtered by `RUST_LOG`.
    pub fn stdout(format: LogFormat) -> Self {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        Self::with_writer(format, filter, std::io::stdout)
    }

    /// Logger writing to an arbitrary writer.
    pub fn with_writer<W>(format: LogFormat, filter: EnvFilter, writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let registry = tracing_subscriber::registry().with(filter);
        let dispatch = match format {
            LogFormat::Json => Dispatch::new(
                registry.with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .flatten_event(true)
                        .with_current_span(false)
                        .with_span_list(false)
                        .with_writer(writer),
                ),
            ),
            LogFormat::Text => Dispatch::new(
                registry.with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(writer)),
            ),
        };
        Self { dispatch }
    }

    /// Logger that discards everything.
    pub fn disabled() -> Self {
        Self {
            dispatch: Dispatch::none(),
        }
    }

    /// Run `f` with this logger as the active dispatcher.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Attach this logger to a future for every poll.
    pub fn attach<F: Future>(&self, fut: F) -> WithDispatch<F> {
        fut.with_subscriber(self.dispatch.clone())
    }

}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io;
    use std::sync::{Arc, Mutex};

    /// In-memory log sink shared between the logger and the test.
    #[derive(Clone, Default)]
    pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }

        pub fn lines(&self) -> Vec<serde_json::Value> {
            self.contents()
                .lines()
                .map(|line| serde_json::from_str(line).unwrap())
                .collect()
        }
    }

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
