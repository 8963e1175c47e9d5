//! Logger facade over [`tracing`] events.
use super::DRY_RUN_TARGET;

/// Console logger used by the sync pipeline.
///
/// Every method forwards to a [`tracing`] event; formatting and routing to
/// stdout/stderr is handled by the subscriber installed with
/// [`init_subscriber`](super::init_subscriber).
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger;

impl Logger {
    /// Create a new logger.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Log a warning message.
    #[allow(clippy::unused_self)]
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log an informational message.
    #[allow(clippy::unused_self)]
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed on console unless verbose).
    #[allow(clippy::unused_self)]
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a dry-run action message.
    #[allow(clippy::unused_self)]
    pub fn dry_run(&self, msg: &str) {
        tracing::info!(target: DRY_RUN_TARGET, "{msg}");
    }
}
