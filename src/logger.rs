//! Plain and JSON structured logging for faviconx

use chrono::{Local, Utc};
use log::{Level, Log, Metadata, Record};
use serde_json::json;
use std::env;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::Mutex;

/// Environment variable holding the log level (`debug`, `json:trace`, ...)
pub const LOG_LEVEL_ENV: &str = "FAVICONX_LOG_LEVEL";

/// Environment variable redirecting JSON records to a file
pub const LOG_PATH_ENV: &str = "FAVICONX_LOG_PATH";

/// JSON logger implementation
#[derive(Debug)]
pub struct JsonLogger {
    level: Level,
    target_file: Mutex<Option<std::fs::File>>,
}

/// Split `json:debug` / `json` / `debug` into (use_json, level)
pub fn parse_level_spec(level_str: &str) -> (bool, &str) {
    if let Some(stripped) = level_str.strip_prefix("json:") {
        (true, stripped)
    } else if level_str == "json" {
        (true, "info")
    } else {
        (false, level_str)
    }
}

fn level_filter(level: &str) -> log::LevelFilter {
    match level {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        "off" => log::LevelFilter::Off,
        _ => log::LevelFilter::Warn,
    }
}

impl JsonLogger {
    /// Create a new JSON logger
    pub fn new(level: Level, log_path: Option<String>) -> Self {
        let target_file = if let Some(path) = log_path {
            OpenOptions::new().create(true).append(true).open(path).ok()
        } else {
            None
        };

        JsonLogger {
            level,
            target_file: Mutex::new(target_file),
        }
    }

    /// Initialize the logger with specified level and source
    pub fn init_with_level(level_str: &str, source: &str) -> (String, String) {
        let log_path = env::var(LOG_PATH_ENV).ok();
        let (use_json, actual_level) = parse_level_spec(level_str);

        if !use_json {
            let filter = level_filter(actual_level);

            let result = env_logger::Builder::new()
                .filter_level(filter)
                .format(|buf, record| {
                    write!(buf, "🎨 ")?;
                    write!(
                        buf,
                        "[{} {} {}] ",
                        Local::now().format("%Y-%m-%dT%H:%M:%S"),
                        record.level(),
                        record.target()
                    )?;
                    writeln!(buf, "{}", record.args())
                })
                .try_init();
            if let Err(e) = result {
                eprintln!("Failed to initialize logger: {e}");
            }
            return (actual_level.to_string(), source.to_string());
        }

        let level = level_filter(actual_level).to_level().unwrap_or(Level::Error);

        let logger = Box::new(JsonLogger::new(level, log_path));

        if let Err(e) = log::set_boxed_logger(logger) {
            eprintln!("Failed to initialize JSON logger: {e}");
            return (actual_level.to_string(), source.to_string());
        }

        log::set_max_level(level.to_level_filter());
        (actual_level.to_string(), source.to_string())
    }

    /// Initialize from `FAVICONX_LOG_LEVEL`, falling back to `default_level`
    pub fn init(default_level: &str) -> (String, String) {
        match env::var(LOG_LEVEL_ENV) {
            Ok(level) => Self::init_with_level(&level, LOG_LEVEL_ENV),
            Err(_) => Self::init_with_level(default_level, "default"),
        }
    }
}

impl Log for JsonLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let log_entry = json!({
            "@timestamp": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
            "@level": record.level().to_string().to_lowercase(),
            "@message": record.args().to_string(),
            "@module": record.target(),
            "@pid": std::process::id(),
            "@file": record.file().unwrap_or("unknown"),
            "@line": record.line().unwrap_or(0),
        });

        let json_string = format!(
            "{}\n",
            serde_json::to_string(&log_entry).unwrap_or_default()
        );

        // Write to file or stderr
        if let Ok(mut file_guard) = self.target_file.lock() {
            if let Some(ref mut file) = *file_guard {
                let _ = file.write_all(json_string.as_bytes());
                let _ = file.flush();
            } else {
                let _ = io::stderr().write_all(json_string.as_bytes());
                let _ = io::stderr().flush();
            }
        } else {
            let _ = io::stderr().write_all(json_string.as_bytes());
            let _ = io::stderr().flush();
        }
    }

    fn flush(&self) {
        if let Ok(mut file_guard) = self.target_file.lock() {
            if let Some(ref mut file) = *file_guard {
                let _ = file.flush();
            }
        }
        let _ = io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_level_spec() {
        assert_eq!(parse_level_spec("json:debug"), (true, "debug"));
        assert_eq!(parse_level_spec("json"), (true, "info"));
        assert_eq!(parse_level_spec("trace"), (false, "trace"));
    }

    #[test]
    fn test_unknown_level_falls_back_to_warn() {
        assert_eq!(level_filter("loud"), log::LevelFilter::Warn);
        assert_eq!(level_filter("off"), log::LevelFilter::Off);
    }

    #[test]
    fn test_json_records_written_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("faviconx.log");
        let logger = JsonLogger::new(Level::Info, Some(path.to_string_lossy().into_owned()));

        logger.log(
            &Record::builder()
                .args(format_args!("resized to 32x32"))
                .level(Level::Info)
                .target("faviconx::generator")
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("filtered out"))
                .level(Level::Debug)
                .target("faviconx::generator")
                .build(),
        );
        logger.flush();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 1);
        let entry: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(entry["@level"], "info");
        assert_eq!(entry["@message"], "resized to 32x32");
        assert_eq!(entry["@module"], "faviconx::generator");
    }
}
