use crate::library::logger::interface::{join_namespace, Logger};
use chrono::Utc;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct LoggerConsole {
    namespace: Option<String>,
    timezone: chrono::FixedOffset,
    verbose: bool,
}

impl LoggerConsole {
    pub fn new(timezone: chrono::FixedOffset, verbose: bool) -> Self {
        Self {
            namespace: None,
            timezone,
            verbose,
        }
    }

    fn format_line(&self, level: &str, message: &str) -> String {
        let local_time = Utc::now().with_timezone(&self.timezone);
        let formatted = local_time.format("%Y-%m-%d %I:%M:%S%.3f %p");
        match &self.namespace {
            Some(namespace) => format!("[{}] {} {}: {}", formatted, level, namespace, message),
            None => format!("[{}] {} {}", formatted, level, message),
        }
    }
}

impl Logger for LoggerConsole {
    fn info(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        println!("{}", self.format_line("INFO", message));
        Ok(())
    }

    fn debug(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.verbose {
            println!("{}", self.format_line("DEBUG", message));
        }
        Ok(())
    }

    fn error(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        eprintln!("{}", self.format_line("ERROR", message));
        Ok(())
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        Arc::new(LoggerConsole {
            namespace: Some(join_namespace(self.namespace.as_deref(), namespace)),
            timezone: self.timezone,
            verbose: self.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_is_nested() {
        let logger = LoggerConsole::new(chrono::FixedOffset::east_opt(0).unwrap(), true);
        let child = LoggerConsole {
            namespace: Some(join_namespace(Some("server"), "capture")),
            ..logger.clone()
        };

        let line = child.format_line("INFO", "hello");

        assert!(line.ends_with("INFO server:capture: hello"));
        assert!(logger.format_line("DEBUG", "x").ends_with("DEBUG x"));
    }
}
