use std::sync::Mutex;

use slog::Drain;
use slog::Fuse;
use slog_async::Async;
use slog_json::Json;

pub use slog::{debug, error, info, o, trace, warn, Discard, Logger};

/// Revision and build time stamped in by the release pipeline, if any.
pub const REVISION: Option<&str> = option_env!("ACTORY_REVISION");
pub const BUILD_TIMESTAMP: Option<&str> = option_env!("ACTORY_BUILD_TIMESTAMP");

/// Builds the root logger: JSON records on stderr, written from a
/// background thread. With `env_logging`, `RUST_LOG` filters records first.
pub fn initialize_logger() -> slog::Logger {
    let drain = Mutex::new(Json::default(std::io::stderr())).map(Fuse);

    #[cfg(feature = "env_logging")]
    let drain = slog_envlogger::new(drain);

    let drain = Async::new(drain).build().fuse();

    Logger::root(
        drain,
        o!("service" => "actory", "version" => env!("CARGO_PKG_VERSION"), "revision" => REVISION, "build_timestamp" => BUILD_TIMESTAMP),
    )
}

pub fn discard_logger() -> slog::Logger {
    Logger::root(Discard, o!())
}
