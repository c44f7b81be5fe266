use crate::error::{Result as ServerErrorResult, ServerError};

use cr_config::{Config, LoggingConfig};

use std::fmt::Arguments;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{Record, info};

/// Resolve the configured log file inside the config directory, creating the
/// directory. `None` means stdout.
pub fn log_file_path(logging: &LoggingConfig) -> ServerErrorResult<Option<PathBuf>> {
    let Some(filename) = logging.file.as_ref() else {
        return Ok(None);
    };

    let log_dir = Config::config_dir()?.join(&logging.dir);
    std::fs::create_dir_all(&log_dir).map_err(|e| ServerError::Io {
        path: log_dir.display().to_string(),
        source: e,
    })?;

    Ok(Some(log_dir.join(filename)))
}

/// Initialize logger with fern
///
/// # Arguments
/// * `logging` - Level and colour settings
/// * `log_file` - None = stdout, Some = append to file (never colored)
pub fn initialize(logging: &LoggingConfig, log_file: Option<PathBuf>) -> ServerErrorResult<()> {
    let level_filter = *logging.level;

    let output = match log_file.as_ref() {
        Some(log_path) => {
            let file = fern::log_file(log_path).map_err(|e| ServerError::Logger {
                message: format!("Failed to open log file {}: {}", log_path.display(), e),
            })?;
            Dispatch::new()
                .format(|out, message, record| write_line(out, message, record, record.level()))
                .chain(file)
        }
        None if logging.colored => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);
            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, message, record, colors.color(record.level()))
                })
                .chain(std::io::stdout())
        }
        // Plain output for non-TTY (systemd, docker logs)
        None => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, record.level()))
            .chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level_filter)
        // reqwest/hyper internals are noisy at debug
        .level_for("hyper_util", log::LevelFilter::Warn)
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    Ok(())
}

fn write_line<L: std::fmt::Display>(
    out: FormatCallback,
    message: &Arguments,
    record: &Record,
    level: L,
) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        level = level,
        message = message,
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}
