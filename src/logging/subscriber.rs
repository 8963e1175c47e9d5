//! Tracing subscriber setup: console formatter and initialisation.
use super::DRY_RUN_TARGET;

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// Render a single event as one console line (without the newline).
///
/// `color` selects ANSI styling; it is off when the destination stream is
/// not a terminal.
fn render(level: tracing::Level, target: &str, msg: &str, color: bool) -> String {
    let paint = |code: &str, text: &str| {
        if color {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    };
    match level {
        tracing::Level::ERROR => format!("{} {msg}", paint("31", "ERROR")),
        tracing::Level::WARN => format!("{}  {msg}", paint("33", "WARN")),
        tracing::Level::INFO if target == DRY_RUN_TARGET => {
            format!("{} {msg}", paint("33", "[DRY RUN]"))
        }
        tracing::Level::INFO => msg.to_string(),
        _ => paint("2", msg),
    }
}

/// A [`tracing_subscriber::fmt::FormatEvent`] that emits plain console
/// lines: info messages verbatim, everything else tagged or dimmed.
struct ConsoleFormatter {
    /// Whether stdout (info and debug) is a terminal.
    stdout_color: bool,
    /// Whether stderr (warnings and errors) is a terminal.
    stderr_color: bool,
}

impl ConsoleFormatter {
    fn detect() -> Self {
        use std::io::IsTerminal as _;
        Self {
            stdout_color: std::io::stdout().is_terminal(),
            stderr_color: std::io::stderr().is_terminal(),
        }
    }

    const fn color_for(&self, level: tracing::Level) -> bool {
        match level {
            tracing::Level::ERROR | tracing::Level::WARN => self.stderr_color,
            _ => self.stdout_color,
        }
    }
}

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for ConsoleFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let level = *metadata.level();
        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        writeln!(
            writer,
            "{}",
            render(
                level,
                metadata.target(),
                &extractor.message,
                self.color_for(level)
            )
        )
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// Info and debug go to stdout, warnings and errors to stderr. Debug output
/// is only shown when `verbose` is set. Must be called once at program
/// startup, before any logging.
pub fn init_subscriber(verbose: bool) {
    use tracing_subscriber::fmt::writer::MakeWriterExt as _;
    use tracing_subscriber::{
        Layer as _, filter::LevelFilter, fmt, layer::SubscriberExt as _,
        util::SubscriberInitExt as _,
    };

    let console_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let make_writer = std::io::stderr
        .with_max_level(tracing::Level::WARN)
        .and(std::io::stdout.with_min_level(tracing::Level::INFO));

    let console_layer = fmt::layer()
        .event_format(ConsoleFormatter::detect())
        .with_writer(make_writer)
        .with_filter(console_level);

    tracing_subscriber::registry().with(console_layer).init();
}

/// A layer that stores every event it sees, for assertions in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(super) struct CaptureLayer {
    events: std::sync::Arc<std::sync::Mutex<Vec<(tracing::Level, String, String)>>>,
}

#[cfg(test)]
impl CaptureLayer {
    pub(super) fn events(
        &self,
    ) -> std::sync::Arc<std::sync::Mutex<Vec<(tracing::Level, String, String)>>> {
        std::sync::Arc::clone(&self.events)
    }
}

#[cfg(test)]
impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for CaptureLayer {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let metadata = event.metadata();
        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        if let Ok(mut events) = self.events.lock() {
            events.push((
                *metadata.level(),
                metadata.target().to_string(),
                extractor.message,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn info_is_printed_verbatim() {
        assert_eq!(
            render(Level::INFO, "version_sync::sync", "Synced x to v1", true),
            "Synced x to v1"
        );
    }

    #[test]
    fn warn_and_error_are_tagged() {
        assert_eq!(
            render(Level::WARN, "t", "careful", true),
            "\x1b[33mWARN\x1b[0m  careful"
        );
        assert_eq!(render(Level::ERROR, "t", "boom", true), "\x1b[31mERROR\x1b[0m boom");
    }

    #[test]
    fn dry_run_is_tagged() {
        assert!(render(Level::INFO, DRY_RUN_TARGET, "would write", true).contains("[DRY RUN]"));
    }

    #[test]
    fn debug_is_dimmed() {
        assert_eq!(render(Level::DEBUG, "t", "detail", true), "\x1b[2mdetail\x1b[0m");
    }

    #[test]
    fn no_escape_codes_without_color() {
        assert_eq!(render(Level::WARN, "t", "careful", false), "WARN  careful");
        assert_eq!(render(Level::ERROR, "t", "boom", false), "ERROR boom");
        assert_eq!(
            render(Level::INFO, DRY_RUN_TARGET, "would write", false),
            "[DRY RUN] would write"
        );
        assert_eq!(render(Level::DEBUG, "t", "detail", false), "detail");
    }

    #[test]
    fn color_follows_destination_stream() {
        let formatter = ConsoleFormatter {
            stdout_color: true,
            stderr_color: false,
        };
        assert!(!formatter.color_for(Level::WARN));
        assert!(!formatter.color_for(Level::ERROR));
        assert!(formatter.color_for(Level::INFO));
        assert!(formatter.color_for(Level::DEBUG));
    }
}
