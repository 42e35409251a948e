use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::Local;
use log::{Level, LevelFilter};

use crate::Result;

pub const TIMESTAMP_FORMAT: &str = "%d-%b-%Y %H:%M:%S";

/// Writes everything to stderr and to the run log.
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        std::io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stderr().flush()?;
        self.file.flush()
    }
}

/// `<timestamp> | <LEVEL> | <message>`, with the level padded to 7 columns.
pub fn format_line(timestamp: &str, level: Level, message: &dyn Display) -> String {
    format!("{timestamp} | {level:<7} | {message}")
}

/// Installs the global logger. Records go to the console and are appended to `log_path`.
///
/// The default level is `debug`; `RUST_LOG` overrides it.
pub fn init(log_path: impl AsRef<Path>) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path.as_ref())?;

    env_logger::Builder::new()
        .filter_level(LevelFilter::Debug)
        .parse_default_env()
        .format(|buf, record| {
            let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
            writeln!(buf, "{}", format_line(&timestamp, record.level(), record.args()))
        })
        .target(env_logger::Target::Pipe(Box::new(TeeWriter { file })))
        .try_init()?;

    Ok(())
}
