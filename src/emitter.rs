//! Line formatting and the two output channels.
//!
//! Every entry goes to the primary writer. ERROR entries are mirrored to the
//! diagnostic writer. The binary wires these to stdout and stderr.

use crate::error::{LogGenError, Result};
use crate::simulation::types::LogEntry;
use std::io::Write;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `[YYYY-MM-DD HH:MM:SS] LEVEL: message` plus ` {json}` when context is non-empty.
pub fn format_line(entry: &LogEntry) -> Result<String> {
    let mut line = format!(
        "[{}] {}: {}",
        entry.timestamp.format(TIMESTAMP_FORMAT),
        entry.level,
        entry.message
    );

    if !entry.context.is_empty() {
        let context =
            serde_json::to_string(&entry.context).map_err(|source| LogGenError::Serialization {
                context: format!("{} context", entry.level),
                source,
            })?;
        line.push(' ');
        line.push_str(&context);
    }

    Ok(line)
}

pub struct Emitter<P: Write, D: Write> {
    primary: P,
    diagnostic: D,
}

impl<P: Write, D: Write> Emitter<P, D> {
    pub fn new(primary: P, diagnostic: D) -> Self {
        Self {
            primary,
            diagnostic,
        }
    }

    /// Write one entry. Any write failure is returned and ends the run.
    pub fn emit(&mut self, entry: &LogEntry) -> Result<()> {
        let line = format_line(entry)?;

        write_line(&mut self.primary, &line)
            .map_err(|e| LogGenError::io("write primary stream", e))?;

        if entry.level.is_diagnostic() {
            write_line(&mut self.diagnostic, &line)
                .map_err(|e| LogGenError::io("write diagnostic stream", e))?;
        }

        Ok(())
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn into_inner(self) -> (P, D) {
        (self.primary, self.diagnostic)
    }
}

impl Emitter<std::io::Stdout, std::io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdout(), std::io::stderr())
    }
}

fn write_line<W: Write>(out: &mut W, line: &str) -> std::io::Result<()> {
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::types::{Context, Level};
    use chrono::NaiveDate;
    use serde_json::json;

    fn entry(level: Level, message: &str, context: Context) -> LogEntry {
        LogEntry {
            timestamp: NaiveDate::from_ymd_opt(2024, 3, 9)
                .unwrap()
                .and_hms_opt(7, 5, 3)
                .unwrap(),
            level,
            message: message.to_string(),
            context,
        }
    }

    fn context(value: serde_json::Value) -> Context {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_format_without_context() {
        let line = format_line(&entry(Level::Info, "Log generator started", Context::new())).unwrap();
        assert_eq!(line, "[2024-03-09 07:05:03] INFO: Log generator started");
    }

    #[test]
    fn test_format_with_compact_context() {
        let ctx = context(json!({"memory_usage": "82%", "threshold": "85%"}));
        let line = format_line(&entry(Level::Warning, "High memory usage detected", ctx)).unwrap();
        assert_eq!(
            line,
            r#"[2024-03-09 07:05:03] WARNING: High memory usage detected {"memory_usage":"82%","threshold":"85%"}"#
        );
    }

    #[test]
    fn test_context_follows_single_space() {
        let ctx = context(json!({"request_count": 3, "processing_time": "42ms"}));
        let line = format_line(&entry(Level::Debug, "Processing request", ctx)).unwrap();

        let (head, tail) = line.split_once(" {").unwrap();
        assert!(head.ends_with("Processing request"));
        let parsed: serde_json::Value = serde_json::from_str(&format!("{{{tail}")).unwrap();
        assert_eq!(parsed["request_count"], 3);
    }

    #[test]
    fn test_only_errors_reach_diagnostic() {
        let mut emitter = Emitter::new(Vec::new(), Vec::new());
        for level in Level::ALL {
            emitter.emit(&entry(level, "msg", Context::new())).unwrap();
        }

        let (primary, diagnostic) = emitter.into_inner();
        let primary = String::from_utf8(primary).unwrap();
        let diagnostic = String::from_utf8(diagnostic).unwrap();

        assert_eq!(primary.lines().count(), 4);
        assert_eq!(diagnostic, "[2024-03-09 07:05:03] ERROR: msg\n");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_reported() {
        let mut emitter = Emitter::new(BrokenPipe, Vec::new());
        let err = emitter
            .emit(&entry(Level::Info, "msg", Context::new()))
            .unwrap_err();
        assert!(matches!(err, LogGenError::Io { operation: "write primary stream", .. }));
    }
}
