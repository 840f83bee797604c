// ============================================================================
// Numeric Module
// Fixed-point ledger amounts with overflow-checked arithmetic
// ============================================================================
//
// This module provides:
// - Amount: i64 magnitude scaled by its symbol's precision
// - ExtendedAmount: Amount qualified by an issuer
// - AssetError: Error types for construction and arithmetic
//
// Design principles:
// - No floating-point operations
// - All fallible arithmetic returns Result (no panics)
// - Symmetric range [-(2^62 - 1), 2^62 - 1] so negation is total
// - Bit-for-bit deterministic rendering

mod amount;
mod errors;
mod extended_amount;

pub use amount::Amount;
pub use errors::{AssetError, AssetResult, Operation};
pub use extended_amount::ExtendedAmount;
