use log::{Level, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;

use crate::error::Result;

struct FileLogger {
    file_path: String,
    level: Level,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)
            {
                let _ = writeln!(
                    file,
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Installs a logger appending debug-level records to `path`.
///
/// Focus-modality transitions are logged at `trace`; use
/// [`init_logger_with_level`] to see them.
pub fn init_logger(path: &str) -> Result<()> {
    init_logger_with_level(path, Level::Debug)
}

pub fn init_logger_with_level(path: &str, level: Level) -> Result<()> {
    let logger = FileLogger {
        file_path: path.to_string(),
        level,
    };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}
