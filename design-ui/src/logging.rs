//! Process-wide logging for hosts embedding the estimator widgets.
//!
//! One `tracing` registry with a global [`EnvFilter`] ceiling and two layers:
//! stdout (colored when attached to a terminal, can be muted) and a file
//! layer that discards output until a log file is attached.

use anyhow::{Context, Result};
use chrono::Local;
use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};
use tracing::{Event, Level, Subscriber, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

use crate::config::LoggingConfig;

const DEFAULT_DIRECTIVE: &str = "info";

// --- Formatter ---

struct StudioFmt;

impl<S, N> FormatEvent<S, N> for StudioFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");

        if ansi {
            write!(writer, "\x1b[2m{timestamp}\x1b[0m ")?;
        } else {
            write!(writer, "{timestamp} ")?;
        }

        let color = match *meta.level() {
            Level::ERROR => "\x1b[1;31m",
            Level::WARN => "\x1b[1;33m",
            Level::INFO => "\x1b[1;32m",
            Level::DEBUG => "\x1b[1;34m",
            Level::TRACE => "\x1b[1;35m",
        };
        if ansi {
            write!(writer, "{color}{:>5}\x1b[0m ", meta.level())?;
        } else {
            write!(writer, "{:>5} ", meta.level())?;
        }

        // crate-qualified target reads better than a file path across the workspace
        if ansi {
            write!(writer, "\x1b[36m{}\x1b[0m ", meta.target())?;
        } else {
            write!(writer, "{} ", meta.target())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Late-bound file writer ---

type SharedFile = Arc<Mutex<Option<File>>>;

/// Writer target that can be pointed at a file after initialization.
/// While no file is attached, writes are dropped.
#[derive(Clone)]
struct FileSlot(SharedFile);

struct SlotWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for SlotWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match &mut *self.0 {
            Some(f) => f.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut *self.0 {
            Some(f) => f.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for FileSlot {
    type Writer = SlotWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SlotWriter(lock_slot(&self.0))
    }
}

// a panic mid-write must not take logging down with it
fn lock_slot(slot: &SharedFile) -> MutexGuard<'_, Option<File>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

// --- Statics ---

type FilterSetter = Box<dyn Fn(EnvFilter) -> Result<()> + Send + Sync>;

static LEVEL_SETTER: OnceLock<FilterSetter> = OnceLock::new();
static STDOUT_SETTER: OnceLock<FilterSetter> = OnceLock::new();
static FILE_SLOT: OnceLock<SharedFile> = OnceLock::new();
static INIT_LOCK: Mutex<()> = Mutex::new(());

fn initial_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

fn setter<S>(
    handle: reload::Handle<EnvFilter, S>,
    what: &'static str,
) -> FilterSetter
where
    S: Subscriber + Send + Sync + 'static,
{
    Box::new(move |filter| {
        handle
            .reload(filter)
            .with_context(|| format!("{what} filter reload failed"))
    })
}

// --- Public API ---

/// Installs the global subscriber. Only the first successful call in a
/// process has an effect; later calls return `Ok(())` and leave the existing
/// setup alone. Fails when another global subscriber is already installed.
///
/// - Level: `RUST_LOG` when set, otherwise `config.level`.
/// - Stdout: shown unless `config.stdout` is false.
/// - File: attached when `config.file` is set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    {
        let _guard = INIT_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        if LEVEL_SETTER.get().is_some() {
            return Ok(());
        }
        install(&config.level)?;
    }

    if !config.stdout {
        set_stdout_enabled(false)?;
    }
    if let Some(path) = &config.file {
        enable_file_logging(path)?;
    }

    info!(level = %config.level, "logging initialized");
    Ok(())
}

fn install(level: &str) -> Result<()> {
    let file_inner: SharedFile = Arc::new(Mutex::new(None));

    let (stdout_gate, stdout_handle) = reload::Layer::new(EnvFilter::new("trace"));
    let (level_filter, level_handle) = reload::Layer::new(initial_filter(level));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(StudioFmt)
        .with_ansi(io::stdout().is_terminal())
        .with_filter(stdout_gate);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(StudioFmt)
        .with_ansi(false)
        .with_writer(FileSlot(file_inner.clone()));

    tracing_subscriber::registry()
        .with(level_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    let _ = FILE_SLOT.set(file_inner);
    let _ = STDOUT_SETTER.set(setter(stdout_handle, "stdout"));
    // set last: init_logging treats a present level setter as "installed"
    let _ = LEVEL_SETTER.set(setter(level_handle, "level"));
    Ok(())
}

/// Changes the active log filter at runtime.
/// Accepts a bare level ("error", "warn", "info", "debug", "trace")
/// or any full `EnvFilter` directive.
pub fn set_log_level(level: &str) -> Result<()> {
    let filter =
        EnvFilter::try_new(level).with_context(|| format!("invalid log level '{level}'"))?;
    match LEVEL_SETTER.get() {
        Some(set) => set(filter),
        None => anyhow::bail!("logging not yet initialized"),
    }
}

/// Shows or hides stdout log output without affecting file logging.
pub fn set_stdout_enabled(enabled: bool) -> Result<()> {
    let filter = EnvFilter::new(if enabled { "trace" } else { "off" });
    match STDOUT_SETTER.get() {
        Some(set) => set(filter),
        None => anyhow::bail!("logging not yet initialized"),
    }
}

/// Appends log output to `path`, replacing any file already attached.
/// The directory must already exist.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let Some(slot) = FILE_SLOT.get() else {
        anyhow::bail!("logging not yet initialized");
    };
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;

    *lock_slot(slot) = Some(file);
    Ok(())
}

/// Detaches the current log file. Records keep going to stdout if enabled.
pub fn disable_file_logging() {
    if let Some(slot) = FILE_SLOT.get() {
        *lock_slot(slot) = None;
    }
}
