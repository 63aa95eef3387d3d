//! Tracing setup shared by every binary in the workspace.

use std::panic;
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

// The non-blocking writer stops flushing once its guard drops; park it for
// the life of the process.
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Initializes the global subscriber and panic hook for a binary.
///
/// Filtering comes from `RUST_LOG` (default `info`). With `FM_LOG_DIR` set,
/// output goes to `<FM_LOG_DIR>/<app>.log` with daily rotation instead of
/// stdout. Calling twice is harmless; the second init is a no-op.
pub fn init(app_name: &'static str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match daily_log_writer(app_name) {
        Some(writer) => {
            let _ = builder.with_writer(writer).try_init();
        }
        None => {
            let _ = builder.try_init();
        }
    }

    install_panic_hook(app_name);
}

fn daily_log_writer(app_name: &'static str) -> Option<BoxMakeWriter> {
    let dir = PathBuf::from(std::env::var_os("FM_LOG_DIR")?);
    if let Err(err) = std::fs::create_dir_all(&dir) {
        eprintln!("fm: cannot create FM_LOG_DIR {}: {err}; logging to stdout", dir.display());
        return None;
    }

    let appender = tracing_appender::rolling::daily(dir, format!("{app_name}.log"));
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);
    Some(BoxMakeWriter::new(writer))
}

/// Routes panics through `tracing` so they land in the same sink as regular
/// logs. Set `FM_LOG_INCLUDE_BACKTRACE=1` to also run the default hook and
/// get the backtrace on stderr. Installed once per process.
pub fn install_panic_hook(app_name: &'static str) {
    static INSTALLED: OnceLock<()> = OnceLock::new();

    INSTALLED.get_or_init(|| {
        let fallback = panic::take_hook();
        let with_backtrace = std::env::var("FM_LOG_INCLUDE_BACKTRACE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        panic::set_hook(Box::new(move |info| {
            let location = info
                .location()
                .map(|loc| format!("{}:{}", loc.file(), loc.line()))
                .unwrap_or_else(|| "unknown".into());
            let message = panic_message(info);
            let thread = std::thread::current();

            tracing::error!(
                application = app_name,
                thread = thread.name().unwrap_or("unnamed"),
                %location,
                panic_message = %message,
                "panic captured"
            );

            if with_backtrace {
                fallback(info);
            }
        }));
    });
}

fn panic_message(info: &panic::PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "panic payload not a string".into()
    }
}
