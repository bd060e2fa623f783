use std::io::Write;

use env_logger::{Builder, Target, fmt::Formatter};
use log::{Level, LevelFilter};

use crate::{Error, Result};

pub fn init_logger(filter: LevelFilter) -> Result<()> {
    let mut builder = Builder::new();
    builder
        .filter_level(filter)
        .write_style(env_logger::WriteStyle::Never)
        .format(|buf: &mut Formatter, record| {
            writeln!(buf, "{} {}", level_tag(record.level()), record.args())
        })
        .target(Target::Stderr);

    builder
        .try_init()
        .map_err(|e| Error::invalid_input(format!("logger init failed: {e}")))
}

pub fn parse_level(value: &str) -> Result<LevelFilter> {
    match value {
        "error" => Ok(LevelFilter::Error),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        "off" => Ok(LevelFilter::Off),
        _ => Err(Error::invalid_input(format!(
            "Invalid log level: {value} (expected error|warn|info|debug|trace|off)"
        ))),
    }
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
