// ============================================================================
// Ledger Asset Library
// Deterministic fixed-point amounts for ledger and contract runtimes
// ============================================================================

//! # Ledger Asset
//!
//! Value types for token amounts in environments where floating point is
//! off the table and every result must be reproducible bit-for-bit.
//!
//! ## Features
//!
//! - **Packed tickers**: up to seven `A`-`Z` characters in a `u64`
//! - **Symbols**: ticker plus decimal precision in a single `u64`
//! - **Range-checked amounts**: `i64` magnitude limited to `±(2^62 - 1)`
//! - **Typed failures**: every overflow, mismatch and division error is an [`AssetError`](numeric::AssetError)
//! - **Issuer qualification**: extended symbols and amounts keyed by the issuing account
//!
//! ## Example
//!
//! ```rust
//! use ledger_asset::prelude::*;
//!
//! let eos = Symbol::parse("EOS", 4)?;
//! let token: IssuerId = "eosio.token".parse()?;
//!
//! let balance = Amount::new(1_500_000, eos)?;
//! let fee = Amount::new(2_500, eos)?;
//! let remaining = (balance - fee)?;
//! assert_eq!(remaining.to_string(), "149.7500 EOS");
//!
//! let held = ExtendedAmount::new(remaining, token);
//! assert_eq!(held.to_string(), "149.7500 EOS@eosio.token");
//!
//! // Overflow is an error, never a wrap
//! let max = Amount::new(Amount::MAX_AMOUNT, eos)?;
//! assert!(matches!(max + fee, Err(AssetError::RangeOverflow { .. })));
//! # Ok::<(), AssetError>(())
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ExtendedSymbol, IssuerId, Symbol, TickerCode};
    pub use crate::interfaces::{Printer, StdoutPrinter, TracingPrinter};
    pub use crate::numeric::{Amount, AssetError, AssetResult, ExtendedAmount, Operation};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_ledger_transfer_flow() {
        let eos = Symbol::parse("EOS", 4).unwrap();
        let token: IssuerId = "eosio.token".parse().unwrap();
        let ext_sym = ExtendedSymbol::new(eos, token);

        let mut sender = ExtendedAmount::from_extended_symbol(10_000_000, ext_sym).unwrap();
        let mut receiver = ExtendedAmount::from_extended_symbol(0, ext_sym).unwrap();
        let transfer = ExtendedAmount::from_extended_symbol(2_500_000, ext_sym).unwrap();

        sender.checked_sub_assign(transfer).unwrap();
        receiver.checked_add_assign(transfer).unwrap();

        assert_eq!(sender.to_string(), "750.0000 EOS@eosio.token");
        assert_eq!(receiver.to_string(), "250.0000 EOS@eosio.token");
        assert_eq!(receiver.try_lt(&sender), Ok(true));

        let total = (sender + receiver).unwrap();
        assert_eq!(total.quantity().amount(), 10_000_000);
    }

    #[test]
    fn test_same_ticker_different_issuer_is_distinct() {
        let eos = Symbol::parse("EOS", 4).unwrap();
        let one = Amount::new(1, eos).unwrap();
        let real = ExtendedAmount::new(one, "eosio.token".parse().unwrap());
        let fake = ExtendedAmount::new(one, "fake.token".parse().unwrap());

        // Plain quantities agree; the issuer makes them different types
        assert_eq!(real.quantity().try_eq(&fake.quantity()), Ok(true));
        assert_ne!(real, fake);
        assert_eq!(real + fake, Err(AssetError::TypeMismatch));
        assert_ne!(real.extended_symbol(), fake.extended_symbol());
    }

    #[test]
    fn test_boundary_arithmetic_and_rendering() {
        let s = Symbol::parse("SYMBOLL", 0).unwrap();
        let max = Amount::new(Amount::MAX_AMOUNT, s).unwrap();
        let one = Amount::new(1, s).unwrap();

        assert_eq!(
            max + one,
            Err(AssetError::RangeOverflow {
                op: Operation::Addition
            })
        );
        assert_eq!(one / 0_i64, Err(AssetError::DivideByZero));
        assert_eq!(
            Amount::from_raw_parts(i64::MIN, s) / -1_i64,
            Err(AssetError::SignedOverflow)
        );
        assert_eq!(
            Amount::new(-1, Symbol::parse("SYMBOLL", 1).unwrap())
                .unwrap()
                .to_string(),
            "-0.1 SYMBOLL"
        );
        assert_eq!(
            Amount::new(Amount::MAX_AMOUNT, Symbol::parse("SYMBOLL", 2).unwrap())
                .unwrap()
                .to_string(),
            "46116860184273879.03 SYMBOLL"
        );
    }

    #[test]
    fn test_printers_agree_with_display() {
        let a = Amount::new(-11, Symbol::parse("A", 1).unwrap()).unwrap();
        let ext = ExtendedAmount::new(a, "1".parse().unwrap());

        let mut out = String::new();
        ext.print(&mut out);
        assert_eq!(out, ext.to_string());

        // Trait objects work as sinks too
        let mut buffer = String::new();
        let sink: &mut dyn Printer = &mut buffer;
        a.print(sink);
        ext.extended_symbol().print(sink, true);
        assert_eq!(buffer, "-1.1 A1,A@1");

        TracingPrinter.print(&a.to_string());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let eos = Symbol::parse("EOS", 4).unwrap();
        let quantity = Amount::new(42, eos).unwrap();
        let held = ExtendedAmount::new(quantity, "eosio.token".parse().unwrap());

        let json = serde_json::to_string(&held).unwrap();
        let back: ExtendedAmount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, held);

        let sym_json = serde_json::to_string(&eos).unwrap();
        assert_eq!(sym_json, eos.raw().to_string());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_invalid_amount() {
        let eos = Symbol::parse("EOS", 4).unwrap();
        let json = format!(r#"{{"amount":{},"symbol":{}}}"#, i64::MAX, eos.raw());
        assert!(serde_json::from_str::<Amount>(&json).is_err());

        let json = r#"{"amount":1,"symbol":0}"#;
        assert!(serde_json::from_str::<Amount>(json).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_default_does_not_load_back() {
        let json = serde_json::to_string(&Amount::default()).unwrap();
        assert!(serde_json::from_str::<Amount>(&json).is_err());

        let json = serde_json::to_string(&ExtendedAmount::default()).unwrap();
        assert!(serde_json::from_str::<ExtendedAmount>(&json).is_err());
    }
}
