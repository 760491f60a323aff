//! Logger setup for the `insta_media` binary.
//!
//! Logs go to stderr. Stdout only ever carries the extracted result, so
//! `--format json` output stays parseable at any log level.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter, Record};
use serde_json::json;

/// Installs the global logger for `--log-level` and `--log-format`.
///
/// `RUST_LOG` is read first, so per-module directives still apply; `level` then
/// becomes the default for this crate. HTML parser and HTTP stack chatter is
/// capped so that `debug` shows the strategy chain rather than tokenizer noise.
///
/// `Plain` prints `target [LEVEL] message` with colored levels. `Json` prints one
/// object per line with `ts` (epoch millis), `level`, `target` and `msg`.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # See which extraction strategy matched
/// insta_media https://www.instagram.com/p/ABC123/ --log-level debug
///
/// # Only the parser, at trace level, as JSON lines
/// RUST_LOG=insta_media::parse=trace insta_media https://www.instagram.com/p/ABC123/ --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    for (module, cap) in DEPENDENCY_LOG_CAPS {
        builder.filter_module(module, *cap);
    }
    builder.filter_module("insta_media", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| writeln!(buf, "{}", json_line(record)));
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    colored_level(record.level()),
                    record.args()
                )
            });
        }
    }

    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Maximum level for dependencies that log per token or per connection.
const DEPENDENCY_LOG_CAPS: &[(&str, LevelFilter)] = &[
    ("html5ever", LevelFilter::Error),
    ("selectors", LevelFilter::Warn),
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
];

fn colored_level(level: Level) -> ColoredString {
    let label = level.to_string();
    match level {
        Level::Error => label.red(),
        Level::Warn => label.yellow(),
        Level::Info => label.green(),
        Level::Debug => label.blue(),
        Level::Trace => label.purple(),
    }
}

fn json_line(record: &Record<'_>) -> String {
    json!({
        "ts": chrono::Utc::now().timestamp_millis(),
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    })
    .to_string()
}
