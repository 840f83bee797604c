// ============================================================================
// Printer Interface
// Output sink for the `print` operations of the asset types
// ============================================================================

use std::io::Write;

/// Sink that accepts rendered text.
///
/// Every `print` method in this crate writes exactly what the type's
/// `Display` implementation produces, so a `String` printer and
/// `to_string()` always agree.
pub trait Printer {
    /// Write a piece of text to the sink
    fn print(&mut self, text: &str);
}

impl Printer for String {
    fn print(&mut self, text: &str) {
        self.push_str(text);
    }
}

/// Writes to the process's standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutPrinter;

impl Printer for StdoutPrinter {
    fn print(&mut self, text: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(err) = out.write_all(text.as_bytes()) {
            tracing::warn!(error = %err, "failed to write to stdout");
        }
    }
}

/// Emits printed text as tracing events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingPrinter;

impl Printer for TracingPrinter {
    fn print(&mut self, text: &str) {
        tracing::info!(target: "ledger_asset::print", "{}", text);
    }
}
