//! tracing setup for the binary.
//!
//! Events go to stderr, never stdout, so a piped report stays clean. A log
//! file can be added through `[logging] file`; it rotates by time and keeps
//! `max_files` old files.

use std::fs;
use std::path::Path;

use tracing::level_filters::LevelFilter;
use tracing::{debug, Level, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::config::LoggingSettings;
use crate::error::{Error, Result};

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync>;

/// Keeps the file writer thread alive; drop it only after the last event.
pub struct LogGuards {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber.
///
/// `-q` wins over everything and leaves only errors. `-v` selects debug and
/// `-vv` trace; with neither, the configured level applies. `RUST_LOG` can
/// add directives for other targets.
pub fn init_logging(settings: &LoggingSettings, verbose: u8, quiet: bool) -> Result<LogGuards> {
    let level = effective_level(&settings.level, verbose, quiet);

    let (file, file_guard) = match settings.file.as_deref() {
        Some(path) => {
            let (layer, guard) = file_layer(Path::new(path), settings)?;
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter_for(level)?)
        .with(stderr_layer(settings.json_format))
        .with(file)
        .try_init()
        .map_err(|e| Error::LoggingSetup(e.to_string()))?;

    debug!(%level, file = ?settings.file, json = settings.json_format, "Logging ready");
    Ok(LogGuards { _file: file_guard })
}

fn effective_level(configured: &str, verbose: u8, quiet: bool) -> Level {
    match (quiet, verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => configured.parse().unwrap_or(Level::WARN),
        (false, 1) => Level::DEBUG,
        (false, _) => Level::TRACE,
    }
}

fn filter_for(level: Level) -> Result<EnvFilter> {
    let own: Directive = format!("staff_report={}", level.to_string().to_lowercase())
        .parse()
        .map_err(|e| Error::LoggingSetup(format!("bad directive: {}", e)))?;

    Ok(EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy()
        .add_directive(own))
}

fn stderr_layer<S>(json: bool) -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let layer = fmt::layer().with_writer(std::io::stderr).with_target(true);
    if json {
        Box::new(layer.json())
    } else {
        Box::new(layer.compact())
    }
}

fn file_layer<S>(path: &Path, settings: &LoggingSettings) -> Result<(BoxedLayer<S>, WorkerGuard)>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| Error::FileWrite {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let prefix = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("staff-report");

    // Rotation is time based only; a small size budget rotates more often.
    let rotation = match settings.max_file_size_mb {
        1..=9 => Rotation::HOURLY,
        _ => Rotation::DAILY,
    };

    let appender = RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(prefix)
        .max_log_files(settings.max_files as usize)
        .build(dir)
        .map_err(|e| Error::LoggingSetup(format!("cannot open {}: {}", path.display(), e)))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true);
    let boxed: BoxedLayer<S> = if settings.json_format {
        Box::new(layer.json())
    } else {
        Box::new(layer)
    };

    Ok((boxed, guard))
}
