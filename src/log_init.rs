use log::{Level, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{CssBuildError, Result};

struct FileLogger {
    file_path: PathBuf,
    level: Level,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = open_append(&self.file_path) {
                let _ = writeln!(file, "[{}] {}", record.level(), record.args());
            }
        }
    }

    fn flush(&self) {}
}

fn open_append(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Appends log lines at `level` and above to the file at `path`.
///
/// Selector commits are logged at `Trace`. Fails if the file cannot be
/// opened or another logger is already installed.
pub fn init_logger(path: impl AsRef<Path>, level: Level) -> Result<()> {
    let file_path = path.as_ref().to_path_buf();
    open_append(&file_path)?;
    let logger = FileLogger { file_path, level };
    log::set_boxed_logger(Box::new(logger)).map_err(|_| CssBuildError::LoggerInstalled)?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}
