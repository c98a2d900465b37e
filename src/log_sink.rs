use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default log file, created in the working directory.
pub const LOG_FILE: &str = "ClockLog.txt";

/// Bounded append-only log of rendered timestamps.
///
/// Writes at most `max_lines` lines, then flushes and closes the file.
/// Logging is best-effort: an open or write failure disables the sink for
/// its lifetime, reported once, and never reaches the render path.
pub struct LogSink {
    writer: Option<BufWriter<File>>,
    lines_written: u32,
    max_lines: u32,
}

impl LogSink {
    /// Open the log file, truncating any previous contents.
    /// `max_lines == 0` disables logging without creating a file.
    pub fn new(path: impl AsRef<Path>, max_lines: u32) -> Self {
        let writer = if max_lines == 0 {
            None
        } else {
            match File::create(path.as_ref()) {
                Ok(file) => Some(BufWriter::new(file)),
                Err(err) => {
                    tracing::error!(
                        error = %err,
                        path = %path.as_ref().display(),
                        "failed to open clock log file, logging disabled"
                    );
                    None
                }
            }
        };
        Self {
            writer,
            lines_written: 0,
            max_lines,
        }
    }

    pub fn is_active(&self) -> bool {
        self.writer.is_some()
    }

    /// Lines actually written to the file so far.
    pub fn lines_written(&self) -> u32 {
        self.lines_written
    }

    /// Append one line. No-op once the cap was reached or after a failure.
    pub fn record(&mut self, line: &str) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };
        if let Err(err) = writeln!(writer, "{line}") {
            tracing::error!(error = %err, "clock log write failed, logging disabled");
            self.writer = None;
            return;
        }
        self.lines_written += 1;
        if self.lines_written == self.max_lines {
            self.close();
        }
    }

    fn close(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            if let Err(err) = writer.flush() {
                tracing::warn!(error = %err, "clock log flush failed");
            }
        }
    }
}
