use std::io::Write;
use std::sync::{Mutex, PoisonError};

use crate::error::SinkError;
use crate::http::RequestOutcome;

use super::OutcomeSink;

/// Writes one flushed text line per outcome.
///
/// The writer is locked for the duration of a single line, so lines from
/// different workers interleave but never tear.
pub struct LineSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> LineSink<W> {
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl LineSink<std::io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> OutcomeSink for LineSink<W> {
    fn record(&self, outcome: &RequestOutcome) -> Result<(), SinkError> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(writer, "{}", outcome).map_err(|err| SinkError::WriteLine { source: err })?;
        writer
            .flush()
            .map_err(|err| SinkError::WriteLine { source: err })
    }
}
