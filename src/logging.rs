use miette::{Context, IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use time::{format_description::FormatItem, macros::format_description, OffsetDateTime, UtcOffset};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    fmt::{format, FmtContext, FormatEvent, FormatFields},
    registry::LookupSpan,
    FmtSubscriber,
};

const TIME_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second]");

/// Initialize the logging system
pub fn init_logging(level: tracing::Level) -> Result<()> {
    // Getting the local offset fails on some platforms when other threads exist,
    // UTC is fine as a fallback for a log prefix
    let local_offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);

    let subscriber = FmtSubscriber::builder()
        .event_format(ReelLogger::new(local_offset))
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .into_diagnostic()
        .wrap_err("Setting default subscriber failed")
}

/// Short colored lines: time, level, module, message
struct ReelLogger {
    offset: UtcOffset,
}

impl ReelLogger {
    fn new(offset: UtcOffset) -> Self {
        Self { offset }
    }
}

impl<S, N> FormatEvent<S, N> for ReelLogger
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();

        let now = OffsetDateTime::now_utc().to_offset(self.offset).time();
        let now = now.format(TIME_FORMAT).map_err(|_| std::fmt::Error)?;
        let target = metadata
            .target()
            .strip_prefix("reelpick::")
            .unwrap_or(metadata.target());

        if writer.has_ansi_escapes() {
            let level = match *metadata.level() {
                Level::ERROR => metadata.level().red().to_string(),
                Level::WARN => metadata.level().yellow().to_string(),
                Level::DEBUG => metadata.level().blue().to_string(),
                Level::TRACE => metadata.level().purple().to_string(),
                _ => metadata.level().green().to_string(),
            };

            write!(&mut writer, "{} {:>5} {} ", now, level, target.dimmed())?;
        } else {
            write!(&mut writer, "{} {:>5} {} ", now, metadata.level(), target)?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}
