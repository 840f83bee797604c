// ============================================================================
// Asset Errors
// Error types for ticker parsing, amount invariants and checked arithmetic
// ============================================================================

use std::fmt;
use thiserror::Error;

/// The arithmetic or comparison operation that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Comparison,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
            Operation::Division => "division",
            Operation::Comparison => "comparison",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while building or operating on assets.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetError {
    /// Ticker or symbol string is malformed
    #[error("invalid format: {0}")]
    InvalidFormat(&'static str),

    /// Amount built with a symbol whose ticker code is not valid
    #[error("invalid symbol name")]
    InvalidSymbol,

    /// Magnitude outside the symmetric `[-MAX_AMOUNT, MAX_AMOUNT]` range
    #[error("magnitude of asset amount must be less than 2^62")]
    OutOfRange,

    /// Binary operation on amounts with different symbols
    #[error("{op} of assets with different symbols is not allowed")]
    SymbolMismatch { op: Operation },

    /// Result below `-MAX_AMOUNT`
    #[error("{op} underflow")]
    RangeUnderflow { op: Operation },

    /// Result above `MAX_AMOUNT`
    #[error("{op} overflow")]
    RangeOverflow { op: Operation },

    /// Attempted division by zero
    #[error("divide by zero")]
    DivideByZero,

    /// `i64::MIN / -1`
    #[error("signed division overflow")]
    SignedOverflow,

    /// Extended amounts with different symbol or issuer
    #[error("type mismatch")]
    TypeMismatch,

    /// Issuer string is not a valid account name
    #[error("invalid issuer: {0}")]
    InvalidIssuer(&'static str),
}

/// Result type alias for asset operations
pub type AssetResult<T> = Result<T, AssetError>;
