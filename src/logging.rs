use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

const LOG_FILE: &str = "mealdb_scraper.log";
const DEFAULT_DIRECTIVE: &str = "mealdb_scraper=info";

/// Initializes logging. The console layer (stderr, warnings and errors) is
/// always installed so it does not interleave with the per-letter progress
/// lines. A JSON file layer rolling daily under `log_dir` is added only when a
/// directory is given; otherwise nothing is written to disk.
///
/// The file layer receives everything the `EnvFilter` lets through (`RUST_LOG`,
/// falling back to `mealdb_scraper=info`). The returned guard flushes it on
/// drop and must be held until exit.
pub fn init_logging(log_dir: Option<&Path>) -> io::Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match file_writer(log_dir)? {
        Some((writer, guard)) => (Some(fmt::layer().json().with_writer(writer)), Some(guard)),
        None => (None, None),
    };

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(LevelFilter::WARN);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    Ok(guard)
}

fn file_writer(log_dir: Option<&Path>) -> io::Result<Option<(NonBlocking, WorkerGuard)>> {
    let Some(dir) = log_dir else {
        return Ok(None);
    };
    fs::create_dir_all(dir)?;

    let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE);
    Ok(Some(tracing_appender::non_blocking(file_appender)))
}
