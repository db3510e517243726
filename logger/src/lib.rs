use chrono::Utc;
use std::fs::OpenOptions;
use std::io::{self, Write};

#[derive(Debug)]
enum LogLevel {
    Info,
    Warn,
    Error,
}

/// Level-tagged, timestamped log lines, either to the console (with ANSI
/// colors) or appended to a file.
pub struct Logger {
    file: Option<std::fs::File>,
}

impl Logger {
    /// Logger that prints to the console.
    pub fn to_console() -> Self {
        Logger { file: None }
    }

    /// Logger that appends to the file at `path`, creating it if needed.
    pub fn to_file(path: &str) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Logger { file: Some(file) })
    }

    // Writes are best-effort: a full disk must not take the app down.
    fn log(&mut self, level: LogLevel, message: &str) {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let line = match level {
            LogLevel::Info => format!("[INFO] [{}]: {}\n", timestamp, message),
            LogLevel::Warn => format!("[WARN] [{}]: {}\n", timestamp, message),
            LogLevel::Error => format!("[ERROR] [{}]: {}\n", timestamp, message),
        };

        match &mut self.file {
            Some(file) => {
                let _ = file.write_all(line.as_bytes());
                let _ = file.flush();
            }
            None => {
                let colored = match level {
                    LogLevel::Info => format!("\x1b[96m{}\x1b[0m", line),
                    LogLevel::Warn => format!("\x1b[93m{}\x1b[0m", line),
                    LogLevel::Error => format!("\x1b[91m{}\x1b[0m", line),
                };
                print!("{}", colored);
                let _ = io::stdout().flush();
            }
        }
    }

    /// Logs an informational message.
    pub fn info(&mut self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Logs a warning message.
    pub fn warn(&mut self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Logs an error message.
    pub fn error(&mut self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_console_logging() {
        let mut logger = Logger::to_console();
        logger.info("Test info message");
        logger.warn("Test warning message");
        logger.error("Test error message");
        // Only verifies that console mode does not panic.
    }

    #[test]
    fn test_file_logging() {
        let log_file = "test.log";
        let mut logger = Logger::to_file(log_file).unwrap();

        logger.info("Test info message in file");
        logger.warn("Test warning message in file");
        logger.error("Test error message in file");

        let contents = fs::read_to_string(log_file).unwrap();
        assert!(contents.contains("[INFO]"));
        assert!(contents.contains("Test info message in file"));
        assert!(contents.contains("[WARN]"));
        assert!(contents.contains("Test warning message in file"));
        assert!(contents.contains("[ERROR]"));
        assert!(contents.contains("Test error message in file"));

        fs::remove_file(log_file).unwrap();
    }

    #[test]
    fn test_file_append() {
        let log_file = "append_test.log";
        let mut logger = Logger::to_file(log_file).unwrap();
        logger.info("First log message");

        // Reopen to simulate appending across runs.
        let mut logger2 = Logger::to_file(log_file).unwrap();
        logger2.info("Second log message");

        let contents = fs::read_to_string(log_file).unwrap();
        assert!(contents.contains("First log message"));
        assert!(contents.contains("Second log message"));

        fs::remove_file(log_file).unwrap();
    }
}
