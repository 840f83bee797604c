// ============================================================================
// Extended Symbol
// Symbol qualified by the issuing account
// ============================================================================

use super::issuer::IssuerId;
use super::symbol::Symbol;
use crate::interfaces::Printer;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A symbol together with its issuer.
///
/// Two issuers may use the same ticker; the pair is the identity. Ordering
/// compares the symbol first and uses the issuer only to break ties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExtendedSymbol {
    symbol: Symbol,
    issuer: IssuerId,
}

impl ExtendedSymbol {
    #[inline]
    pub const fn new(symbol: Symbol, issuer: IssuerId) -> Self {
        Self { symbol, issuer }
    }

    #[inline]
    pub const fn symbol(&self) -> Symbol {
        self.symbol
    }

    #[inline]
    pub const fn issuer(&self) -> IssuerId {
        self.issuer
    }

    /// Print as `"4,EOS@eosio.token"`, or `"EOS@eosio.token"` without precision.
    pub fn print<P: Printer + ?Sized>(&self, printer: &mut P, show_precision: bool) {
        self.symbol.print(printer, show_precision);
        printer.print("@");
        printer.print(&self.issuer.to_string());
    }
}

impl fmt::Display for ExtendedSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.symbol, self.issuer)
    }
}
