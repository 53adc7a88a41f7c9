//! Process-wide log subscriber, installed once by each binary.
//!
//! Lines look like `2024-01-01 09:30:00: INFO: message key=value`.

use std::fmt;
use std::io::IsTerminal;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const RESET: &str = "\x1b[0m";
const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";
const GREY: &str = "\x1b[90m";

/// `timestamp: LEVEL: message`
pub struct ColonFormat;

fn level_color(level: Level) -> &'static str {
    match level {
        Level::ERROR => FG_RED,
        Level::WARN => FG_YELLOW,
        Level::INFO => FG_GREEN,
        Level::DEBUG => FG_BLUE,
        Level::TRACE => GREY,
    }
}

impl<S, N> FormatEvent<S, N> for ColonFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let level = *event.metadata().level();
        write!(writer, "{}: ", chrono::Local::now().format(TIMESTAMP_FORMAT))?;

        if writer.has_ansi_escapes() {
            write!(writer, "{}{}{}: ", level_color(level), level, RESET)?;
        } else {
            write!(writer, "{}: ", level)?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Log to stderr at `info` unless `RUST_LOG` says otherwise.
/// Levels are coloured only when stderr is a terminal.
pub fn init() {
    let ansi = std::io::stderr().is_terminal();

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .event_format(ColonFormat),
        )
        .try_init();
}
