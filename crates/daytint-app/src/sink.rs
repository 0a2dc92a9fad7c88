//! Render sinks: where computed appearances go.

use std::io::{self, Write};

use daytint_common::DaytintError;
use daytint_engine::Appearance;

/// Receives every computed appearance.
pub trait RenderSink: Send {
    fn render(&mut self, appearance: &Appearance) -> daytint_common::Result<()>;
}

/// Line format for [`StdoutSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Css,
    Json,
}

impl OutputFormat {
    pub fn format(&self, appearance: &Appearance) -> daytint_common::Result<String> {
        match self {
            OutputFormat::Css => Ok(appearance.to_css()),
            OutputFormat::Json => serde_json::to_string(appearance)
                .map_err(|e| DaytintError::Render(format!("failed to serialize appearance: {e}"))),
        }
    }
}

/// Writes one line per appearance change.
///
/// Repeated identical appearances are skipped, so a once-per-second tick
/// only prints when the visible color actually moves.
pub struct StdoutSink<W = io::Stdout> {
    out: W,
    format: OutputFormat,
    last: Option<Appearance>,
}

impl StdoutSink {
    pub fn new(format: OutputFormat) -> Self {
        Self::with_writer(io::stdout(), format)
    }
}

impl<W: Write> StdoutSink<W> {
    pub fn with_writer(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            last: None,
        }
    }
}

impl<W: Write + Send> RenderSink for StdoutSink<W> {
    fn render(&mut self, appearance: &Appearance) -> daytint_common::Result<()> {
        if self.last.as_ref() == Some(appearance) {
            return Ok(());
        }
        let line = self.format.format(appearance)?;
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        self.last = Some(appearance.clone());
        Ok(())
    }
}
