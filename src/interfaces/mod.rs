// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod printer;

pub use printer::{Printer, StdoutPrinter, TracingPrinter};
