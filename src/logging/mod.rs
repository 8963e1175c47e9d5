//! Logging infrastructure for console output.

mod logger;
mod subscriber;

pub use logger::Logger;
pub use subscriber::init_subscriber;

/// Target used for dry-run action messages.
pub(crate) const DRY_RUN_TARGET: &str = "version_sync::dry_run";

/// Collect every tracing event emitted on the current thread while the
/// returned guard is alive.
///
/// Each captured entry is `(level, target, message)`.
#[cfg(test)]
pub(crate) fn capture_events() -> (
    std::sync::Arc<std::sync::Mutex<Vec<(tracing::Level, String, String)>>>,
    tracing::dispatcher::DefaultGuard,
) {
    use tracing_subscriber::layer::SubscriberExt as _;
    let layer = subscriber::CaptureLayer::default();
    let events = layer.events();
    let subscriber = tracing_subscriber::registry().with(layer);
    let guard = tracing::dispatcher::set_default(&tracing::Dispatch::new(subscriber));
    (events, guard)
}
