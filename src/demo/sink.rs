//! Text output sinks.

use std::io::{self, Write};

/// Blocking text output consumed by the demo loop.
///
/// The board demo transmits each formatted line over a polled UART; the
/// host-side contract is the same: a synchronous write of a complete
/// string that has finished transmitting when the call returns.
pub trait TextSink {
    fn write_text(&mut self, text: &str) -> io::Result<()>;
}

/// Sink that writes to standard output, flushed per call.
pub struct StdoutSink;

impl TextSink for StdoutSink {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }
}

/// In-memory sink, used by tests to capture demo output.
impl TextSink for Vec<u8> {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.extend_from_slice(text.as_bytes());
        Ok(())
    }
}
