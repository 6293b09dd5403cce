use std::sync::OnceLock;
use chrono::{DateTime, Local};

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format_line(&self, timestamp: DateTime<Local>, message: &str) -> String {
        let timestamp = timestamp.format("%Y-%m-%d %H:%M:%S%.3f");
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}] {}", timestamp, prefix, message),
            None => format!("[{}] {}", timestamp, message),
        }
    }

    pub fn log(&self, message: &str) {
        println!("{}", self.format_line(Local::now(), message));
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

/// Messages logged before `init_logger` are dropped, so library code and tests can log freely.
pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    #[test]
    fn test_format_line_without_prefix() {
        let logger = Logger::new(None);
        assert_eq!(
            logger.format_line(fixed_time(), "Game started"),
            "[2024-03-09 14:05:07.000] Game started"
        );
    }

    #[test]
    fn test_format_line_with_prefix() {
        let logger = Logger::new(Some("Snake".to_string()));
        assert_eq!(
            logger.format_line(fixed_time(), "Ate food"),
            "[2024-03-09 14:05:07.000][Snake] Ate food"
        );
    }

    #[test]
    fn test_log_before_init_does_not_panic() {
        crate::log!("dropped {}", 1);
    }
}
