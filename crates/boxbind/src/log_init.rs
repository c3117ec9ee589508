use log::{Level, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;

struct FileLogger {
    file_path: String,
    max_level: Level,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
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

/// Install a file-backed logger at the given level.
///
/// The demo writes to a file so the alternate screen stays clean. A second
/// call (another logger already installed) is a no-op.
pub fn init_logger(path: &str, max_level: Level) {
    let logger = FileLogger {
        file_path: path.to_string(),
        max_level,
    };
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(max_level.to_level_filter());
    }
}
