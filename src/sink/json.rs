// src/sink/json.rs - JSON-lines output sink

use crate::indicators::IndicatorSet;
use crate::sink::OutputSink;
use std::io::Write;

/// Writes each indicator set as one line of JSON to `writer`.
///
/// Write failures are logged and skipped; a sink never interrupts the
/// simulation.
pub struct JsonSink<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of lines successfully written.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, indicators: &IndicatorSet) -> Result<(), String> {
        let line = serde_json::to_string(indicators)
            .map_err(|e| format!("Failed to serialize indicators: {}", e))?;
        writeln!(self.writer, "{}", line).map_err(|e| format!("Failed to write indicators: {}", e))
    }
}

impl JsonSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> OutputSink for JsonSink<W> {
    fn name(&self) -> &str {
        "json"
    }

    fn report(&mut self, indicators: &IndicatorSet) {
        match self.write_line(indicators) {
            Ok(()) => self.written += 1,
            Err(error) => tracing::warn!(
                target: "marine_eco::sink",
                sink = self.name(),
                %error,
                "sink.report_failed"
            ),
        }
    }
}
