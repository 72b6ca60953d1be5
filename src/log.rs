//! Logger setup for the command line tool.

use env_logger::{Builder, Env};
use log::LevelFilter;

use std::io::Write;

//-----------------------------------------------------------------------------

/// Log level used when `RUST_LOG` is not set.
///
/// A successful run prints nothing at this level.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Builds the logger using the environment variable `RUST_LOG` to determine the log level.
/// Uses `level` if the environment variable is not set.
///
/// Messages go to stderr.
/// Calling this more than once has no effect.
pub fn init_logger(level: LevelFilter) {
    let env = Env::default().default_filter_or(level.as_str());
    let mut builder = Builder::from_env(env);
    let _ = builder
        .format(|buf, record| {
            writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
        })
        .try_init();
}

//-----------------------------------------------------------------------------
