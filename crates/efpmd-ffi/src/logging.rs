use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs a stderr logger for the library's diagnostics.
///
/// `verbosity` 0 shows warnings and errors, 1 adds info, 2 debug and 3 or
/// more trace output. Lines carry no timestamp; the host driver owns the
/// clock of its own log. Returns `false` if a global logger is already set.
#[unsafe(no_mangle)]
pub extern "C" fn efpmd_logging_init(verbosity: u8) -> bool {
    let driver_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .without_time()
        .with_target(false);

    tracing_subscriber::registry()
        .with(level_filter(verbosity))
        .with(driver_layer)
        .try_init()
        .is_ok()
}
