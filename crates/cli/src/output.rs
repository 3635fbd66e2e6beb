//! Unified-diff rendering for the terminal.

use colored::Colorize;
use std::io::Write;
use zonediff_application::ports::DiffSink;
use zonediff_domain::DomainError;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Writes the diff header and body lines to any `Write`, stdout in practice.
pub struct TerminalDiffWriter<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> TerminalDiffWriter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn timestamp() -> String {
        chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
    }

    fn write_line(&mut self, line: &str) -> Result<(), DomainError> {
        writeln!(self.out, "{}", line).map_err(|e| DomainError::IoError(e.to_string()))
    }
}

impl<W: Write + Send> DiffSink for TerminalDiffWriter<W> {
    fn header(&mut self, first: &str, second: &str) -> Result<(), DomainError> {
        let timestamp = Self::timestamp();
        self.write_line(&format!("--- {}\t{}", first, timestamp))?;
        self.write_line(&format!("+++ {}\t\t{}", second, timestamp))
    }

    fn removed(&mut self, line: &str) -> Result<(), DomainError> {
        let line = format!("-{}", line);
        if self.color {
            self.write_line(&line.red().to_string())
        } else {
            self.write_line(&line)
        }
    }

    fn added(&mut self, line: &str) -> Result<(), DomainError> {
        let line = format!("+{}", line);
        if self.color {
            self.write_line(&line.green().to_string())
        } else {
            self.write_line(&line)
        }
    }
}
