//! Process-wide `tracing` subscriber with a runtime-adjustable level, a
//! stdout echo that the terminal UI can mute, and an optional log file.

use anyhow::{Context, Result};
use chrono::Local;
use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    Layer, // for .with_filter() on the stdout layer
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

const DEFAULT_DIRECTIVE: &str = "info";

/// `<local timestamp> <LEVEL> <file:line> <fields>`, colored on a terminal.
struct CounterFmt;

impl<S, N> FormatEvent<S, N> for CounterFmt
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
        let stamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");

        if ansi {
            write!(writer, "\x1b[2m{stamp}\x1b[0m ")?;
        } else {
            write!(writer, "{stamp} ")?;
        }

        if ansi {
            write!(writer, "{}{:>5}\x1b[0m ", level_color(meta.level()), meta.level())?;
        } else {
            write!(writer, "{:>5} ", meta.level())?;
        }

        if let (Some(file), Some(line)) = (meta.file(), meta.line()) {
            let file = file
                .rsplit_once("src/")
                .map(|(_, rest)| rest)
                .unwrap_or(file);
            write!(writer, "{file}:{line} ")?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_color(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "\x1b[1;31m",
        Level::WARN => "\x1b[1;33m",
        Level::INFO => "\x1b[1;32m",
        Level::DEBUG => "\x1b[1;34m",
        Level::TRACE => "\x1b[1;35m",
    }
}

type SharedFile = Arc<Mutex<Option<File>>>;

/// Writer target that can be pointed at a file after the subscriber is
/// installed. Records are dropped while no file is set.
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

/// A panic while holding the slot must not silence logging for good.
fn lock_slot(slot: &SharedFile) -> MutexGuard<'_, Option<File>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

type SetFilterFn = Box<dyn Fn(EnvFilter) -> Result<()> + Send + Sync>;

static LEVEL_HANDLE: OnceLock<SetFilterFn> = OnceLock::new();
static STDOUT_HANDLE: OnceLock<SetFilterFn> = OnceLock::new();
static FILE_SLOT: OnceLock<SharedFile> = OnceLock::new();

fn boxed_reload<S>(
    handle: reload::Handle<EnvFilter, S>,
    what: &'static str,
) -> SetFilterFn
where
    S: Subscriber + Send + Sync + 'static,
{
    Box::new(move |filter| {
        handle
            .reload(filter)
            .map_err(|e| anyhow::anyhow!("{what} reload failed: {e}"))
    })
}

fn apply(
    handle: &OnceLock<SetFilterFn>,
    filter: EnvFilter,
) -> Result<()> {
    match handle.get() {
        Some(set) => set(filter),
        None => anyhow::bail!("logging not yet initialized"),
    }
}

fn initial_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the global subscriber. Call once at startup; later calls are
/// ignored.
///
/// - Level: `RUST_LOG` when set, `info` otherwise; changeable at runtime.
/// - Stdout: colored on a terminal, plain when piped; can be switched off
///   while the terminal UI owns the screen.
/// - File: silent until [`enable_file_logging`] is called.
pub fn init_default_logging() {
    let file_inner: SharedFile = Arc::new(Mutex::new(None));

    let (level_filter, level_handle) = reload::Layer::new(initial_filter());
    // The stdout gate starts open; the level filter above is still the ceiling.
    let (stdout_gate, stdout_handle) = reload::Layer::new(EnvFilter::new("trace"));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(CounterFmt)
        .with_ansi(io::stdout().is_terminal())
        .with_filter(stdout_gate);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(CounterFmt)
        .with_ansi(false)
        .with_writer(FileSlot(file_inner.clone()));

    if tracing_subscriber::registry()
        .with(level_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .is_ok()
    {
        let _ = FILE_SLOT.set(file_inner);
        let _ = LEVEL_HANDLE.set(boxed_reload(level_handle, "level"));
        let _ = STDOUT_HANDLE.set(boxed_reload(stdout_handle, "stdout"));
    }
}

/// Replaces the active filter. Accepts a bare level (`"debug"`) or any
/// `EnvFilter` directive string.
pub fn set_log_level(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("invalid log level '{directive}'"))?;
    apply(&LEVEL_HANDLE, filter)
}

/// Shows or hides stdout output. File logging is unaffected.
pub fn set_stdout_enabled(enabled: bool) -> Result<()> {
    apply(
        &STDOUT_HANDLE,
        EnvFilter::new(if enabled { "trace" } else { "off" }),
    )
}

/// Appends log output to `path`, replacing any file already open. The parent
/// directory must exist.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;

    let slot = FILE_SLOT
        .get()
        .context("logging not yet initialized")?;
    *lock_slot(slot) = Some(file);
    Ok(())
}

/// Closes the log file, if any.
pub fn disable_file_logging() {
    if let Some(slot) = FILE_SLOT.get() {
        *lock_slot(slot) = None;
    }
}
