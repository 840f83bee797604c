// ============================================================================
// Domain Models Module
// Identity value objects: tickers, symbols and issuers
// ============================================================================

pub mod extended_symbol;
pub mod issuer;
pub mod symbol;
pub mod ticker;

pub use extended_symbol::ExtendedSymbol;
pub use issuer::IssuerId;
pub use symbol::Symbol;
pub use ticker::TickerCode;
