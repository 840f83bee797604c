// ============================================================================
// Symbol
// Ticker code plus decimal precision packed into a u64
// ============================================================================

use super::ticker::TickerCode;
use crate::interfaces::Printer;
use crate::numeric::{AssetError, AssetResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A ticker code together with its precision.
///
/// Stored as `(code << 8) | precision`. Construction never validates;
/// callers that need the invariant check [`Symbol::is_valid`]. Precision is
/// not part of validity, but rendering is only guaranteed up to
/// [`Symbol::MAX_SAFE_PRECISION`].
///
/// # Example
/// ```
/// use ledger_asset::domain::Symbol;
///
/// let eos = Symbol::parse("EOS", 4)?;
/// assert_eq!(eos.precision(), 4);
/// assert_eq!(eos.code().to_string(), "EOS");
/// assert_eq!(eos.to_string(), "4,EOS");
/// # Ok::<(), ledger_asset::numeric::AssetError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[repr(transparent)]
pub struct Symbol(u64);

impl Symbol {
    /// Highest precision with a guaranteed decimal rendering
    pub const MAX_SAFE_PRECISION: u8 = 63;

    /// Create from a raw packed value without validation.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Pack a code and precision. No validation is performed.
    #[inline]
    pub const fn new(code: TickerCode, precision: u8) -> Self {
        Self((code.raw() << 8) | precision as u64)
    }

    /// Parse the ticker from a string and pack it with `precision`.
    ///
    /// # Errors
    /// Returns `InvalidFormat` if the ticker string is rejected.
    pub fn parse(code: &str, precision: u8) -> AssetResult<Self> {
        Ok(Self::new(code.parse()?, precision))
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn code(self) -> TickerCode {
        TickerCode::from_raw(self.0 >> 8)
    }

    #[inline]
    pub const fn precision(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// A symbol is valid when its ticker code is.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.code().is_valid()
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Print as `"4,EOS"`, or just `"EOS"` when `show_precision` is false.
    pub fn print<P: Printer + ?Sized>(&self, printer: &mut P, show_precision: bool) {
        if show_precision {
            printer.print(&self.to_string());
        } else {
            printer.print(&self.code().to_string());
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.precision(), self.code())
    }
}

impl FromStr for Symbol {
    type Err = AssetError;

    /// Parse the `"<precision>,<CODE>"` form, e.g. `"4,EOS"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (precision, code) = s.split_once(',').ok_or(AssetError::InvalidFormat(
            "symbol string must be `<precision>,<code>`",
        ))?;
        let precision: u8 = precision.trim().parse().map_err(|_| {
            AssetError::InvalidFormat("symbol precision must be an integer in 0..=255")
        })?;
        Self::parse(code.trim(), precision)
    }
}

impl From<Symbol> for u64 {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> TickerCode {
        s.parse().unwrap()
    }

    #[test]
    fn test_raw_packing() {
        assert_eq!(Symbol::default().raw(), 0);
        assert_eq!(Symbol::from_raw(u64::MAX).raw(), u64::MAX);

        assert_eq!(Symbol::new(code("A"), 0).raw(), 16640);
        assert_eq!(Symbol::new(code("Z"), 0).raw(), 23040);
        assert_eq!(Symbol::new(code("AAAAAAA"), 0).raw(), 4702111234474983680);
        assert_eq!(Symbol::new(code("ZZZZZZZ"), 0).raw(), 6510615555426900480);
        assert_eq!(Symbol::parse("ZZZZZZZ", 0).unwrap().raw(), 6510615555426900480);
    }

    #[test]
    fn test_projections() {
        let sym = Symbol::new(code("SYMBOLL"), 255);
        assert_eq!(sym.precision(), 255);
        assert_eq!(sym.code(), code("SYMBOLL"));

        let sym = Symbol::new(code("A"), 0);
        assert_eq!(sym.precision(), 0);
        assert_eq!(sym.code(), code("A"));
    }

    #[test]
    fn test_is_valid() {
        assert!(Symbol::from_raw(16640).is_valid());
        assert!(Symbol::from_raw(23040).is_valid());
        assert!(Symbol::from_raw(4702111234474983680).is_valid());
        assert!(Symbol::from_raw(6510615555426900480).is_valid());

        assert!(!Symbol::from_raw(16639).is_valid());
        assert!(!Symbol::from_raw(6510615555426900736).is_valid());
        assert!(!Symbol::default().is_valid());
    }

    #[test]
    fn test_parse_propagates_ticker_errors() {
        assert!(matches!(
            Symbol::parse("TOOLONGX", 4),
            Err(AssetError::InvalidFormat(_))
        ));
        assert!(matches!(
            Symbol::parse("eos", 4),
            Err(AssetError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_emptiness() {
        assert!(Symbol::from_raw(0).is_empty());
        assert!(!Symbol::from_raw(1).is_empty());
        assert!(Symbol::parse("", 0).unwrap().is_empty());
        assert!(!Symbol::parse("SYMBOLL", 0).unwrap().is_empty());
    }

    #[test]
    fn test_comparison() {
        let sc = [code("A"), code("Z"), code("AAAAAAA"), code("ZZZZZZZ")];
        for c in sc {
            assert_eq!(Symbol::new(c, 0), Symbol::new(c, 0));
            assert_ne!(Symbol::new(c, 0), Symbol::default());
            assert!(Symbol::default() < Symbol::new(c, 0));
        }
    }

    #[test]
    fn test_display_and_print() {
        assert_eq!(Symbol::new(code("A"), 0).to_string(), "0,A");
        assert_eq!(Symbol::new(code("ZZZZZZZ"), 255).to_string(), "255,ZZZZZZZ");

        let mut out = String::new();
        Symbol::new(code("AAAAAAA"), 255).print(&mut out, true);
        assert_eq!(out, "255,AAAAAAA");

        let mut out = String::new();
        Symbol::new(code("EOS"), 4).print(&mut out, false);
        assert_eq!(out, "EOS");
    }

    #[test]
    fn test_from_str() {
        let sym: Symbol = "4,EOS".parse().unwrap();
        assert_eq!(sym, Symbol::new(code("EOS"), 4));

        assert!(matches!(
            "EOS".parse::<Symbol>(),
            Err(AssetError::InvalidFormat(_))
        ));
        assert!(matches!(
            "256,EOS".parse::<Symbol>(),
            Err(AssetError::InvalidFormat(_))
        ));
        assert!(matches!(
            "4,eos".parse::<Symbol>(),
            Err(AssetError::InvalidFormat(_))
        ));
    }
}
