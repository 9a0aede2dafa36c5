use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing::{Dispatch, Level};
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Layer};

/// Date and time, e.g. `2024/05/01 12:30:05`.
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y/%m/%d %H:%M:%S"))
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        "sum_check=debug,info"
    } else {
        "sum_check=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Builds the logger for one run.
///
/// Every event goes to stdout and to `log_file` (truncated on open). Error
/// events are written by a separate layer that adds the source file and line.
/// The returned dispatcher is not installed; the caller decides its scope,
/// usually with [`tracing::dispatcher::set_default`].
pub fn build_run_logger(verbose: bool, log_file: &Path) -> std::io::Result<Dispatch> {
    let file = Arc::new(File::create(log_file)?);

    let info_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout.and(Arc::clone(&file)))
        .with_ansi(false)
        .with_timer(LocalTime)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_filter(filter_fn(|meta| *meta.level() != Level::ERROR));

    let error_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout.and(file))
        .with_ansi(false)
        .with_timer(LocalTime)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(filter_fn(|meta| *meta.level() == Level::ERROR));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(info_layer)
        .with(error_layer);

    Ok(Dispatch::new(subscriber))
}
