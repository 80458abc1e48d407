//! Log verbosity plumbing.
//!
//! The crate logs through the `log` facade. Resolving options changes the
//! verbosity threshold, and that write goes through a [`LogSink`] handed to the
//! resolver instead of touching the global logger implicitly. Binaries that
//! want the process-wide behavior use [`GlobalLogSink`].

use log::LevelFilter;
use std::sync::RwLock;

/// Receiver of the verbosity threshold chosen by the resolved configuration.
pub trait LogSink: Send + Sync {
    fn set_max_level(&self, level: LevelFilter);
}

/// Sink that writes the process-wide `log` threshold.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobalLogSink;

impl LogSink for GlobalLogSink {
    fn set_max_level(&self, level: LevelFilter) {
        log::set_max_level(level);
    }
}

/// Sink that only remembers the last level it was given.
#[derive(Debug, Default)]
pub struct RecordingLogSink {
    level: RwLock<Option<LevelFilter>>,
}

impl RecordingLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> Option<LevelFilter> {
        *self.level.read().unwrap_or_else(|e| e.into_inner())
    }
}

impl LogSink for RecordingLogSink {
    fn set_max_level(&self, level: LevelFilter) {
        *self.level.write().unwrap_or_else(|e| e.into_inner()) = Some(level);
    }
}

/// Maps the numeric `logLevel` setting onto a `log` threshold.
///
/// `0` trace, `1` debug, `2` info, `3` warn, `4` error, `5` and above silence
/// everything. Negative values are treated as trace.
pub fn level_filter(level: i64) -> LevelFilter {
    match level {
        i64::MIN..=0 => LevelFilter::Trace,
        1 => LevelFilter::Debug,
        2 => LevelFilter::Info,
        3 => LevelFilter::Warn,
        4 => LevelFilter::Error,
        _ => LevelFilter::Off,
    }
}

/// Installs `env_logger` as the `log` backend. Safe to call more than once.
///
/// `RUST_LOG` decides which records the backend accepts (everything when
/// unset); the resolved `logLevel` narrows that further at runtime.
pub fn init_logger() {
    let env = env_logger::Env::default().default_filter_or("trace");
    let _ = env_logger::Builder::from_env(env).try_init();
}
