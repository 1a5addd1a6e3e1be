//! Output sink for printed register values.
//!
//! The machine never prints directly. PRN hands the register value to an
//! [`OutputSink`] supplied by the caller, so the binary can wire up stdout
//! while tests capture the values instead of scraping process output.

/// Destination for the values PRN emits.
pub trait OutputSink {
    /// Receives one printed register value.
    fn emit(&mut self, value: u8);
}

/// Sink that prints each value on its own line, in decimal.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, value: u8) {
        println!("{value}");
    }
}
