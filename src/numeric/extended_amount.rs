// ============================================================================
// Extended Amount
// Amount qualified by the issuing account
// ============================================================================

use super::amount::Amount;
use super::errors::{AssetError, AssetResult};
use crate::domain::{ExtendedSymbol, IssuerId};
use crate::interfaces::Printer;
use std::fmt;
use std::ops::{Add, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An [`Amount`] together with the issuer of its symbol.
///
/// Arithmetic and ordering require matching extended symbols (symbol *and*
/// issuer) and fail with `TypeMismatch` otherwise. `==` compares both fields
/// structurally and never fails.
///
/// With the `serde` feature the quantity is re-validated on load, so
/// `ExtendedAmount::default()` (empty symbol) cannot be deserialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExtendedAmount {
    quantity: Amount,
    issuer: IssuerId,
}

impl ExtendedAmount {
    #[inline]
    pub const fn new(quantity: Amount, issuer: IssuerId) -> Self {
        Self { quantity, issuer }
    }

    /// Build from a magnitude and an extended symbol.
    ///
    /// # Errors
    /// Propagates the `InvalidSymbol`/`OutOfRange` checks of [`Amount::new`].
    pub fn from_extended_symbol(amount: i64, symbol: ExtendedSymbol) -> AssetResult<Self> {
        Ok(Self {
            quantity: Amount::new(amount, symbol.symbol())?,
            issuer: symbol.issuer(),
        })
    }

    #[inline]
    pub const fn quantity(&self) -> Amount {
        self.quantity
    }

    #[inline]
    pub const fn issuer(&self) -> IssuerId {
        self.issuer
    }

    #[inline]
    pub const fn extended_symbol(&self) -> ExtendedSymbol {
        ExtendedSymbol::new(self.quantity.symbol(), self.issuer)
    }

    fn ensure_same_type(&self, other: &Self) -> AssetResult<()> {
        if self.extended_symbol() == other.extended_symbol() {
            Ok(())
        } else {
            tracing::trace!(
                lhs = %self.extended_symbol(),
                rhs = %other.extended_symbol(),
                "extended amount type mismatch"
            );
            Err(AssetError::TypeMismatch)
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    pub fn checked_add(self, rhs: Self) -> AssetResult<Self> {
        self.ensure_same_type(&rhs)?;
        Ok(Self {
            quantity: self.quantity.checked_add(rhs.quantity)?,
            ..self
        })
    }

    pub fn checked_sub(self, rhs: Self) -> AssetResult<Self> {
        self.ensure_same_type(&rhs)?;
        Ok(Self {
            quantity: self.quantity.checked_sub(rhs.quantity)?,
            ..self
        })
    }

    pub fn checked_add_assign(&mut self, rhs: Self) -> AssetResult<()> {
        *self = self.checked_add(rhs)?;
        Ok(())
    }

    pub fn checked_sub_assign(&mut self, rhs: Self) -> AssetResult<()> {
        *self = self.checked_sub(rhs)?;
        Ok(())
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    pub fn try_lt(&self, other: &Self) -> AssetResult<bool> {
        self.ensure_same_type(other)?;
        self.quantity.try_lt(&other.quantity)
    }

    pub fn try_le(&self, other: &Self) -> AssetResult<bool> {
        self.ensure_same_type(other)?;
        self.quantity.try_le(&other.quantity)
    }

    pub fn try_gt(&self, other: &Self) -> AssetResult<bool> {
        self.ensure_same_type(other)?;
        self.quantity.try_gt(&other.quantity)
    }

    pub fn try_ge(&self, other: &Self) -> AssetResult<bool> {
        self.ensure_same_type(other)?;
        self.quantity.try_ge(&other.quantity)
    }

    /// Print as `"1.1 A@issuer"`.
    pub fn print<P: Printer + ?Sized>(&self, printer: &mut P) {
        self.quantity.print(printer);
        printer.print("@");
        printer.print(&self.issuer.to_string());
    }
}

impl Neg for ExtendedAmount {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            quantity: -self.quantity,
            ..self
        }
    }
}

impl Add for ExtendedAmount {
    type Output = AssetResult<ExtendedAmount>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl Sub for ExtendedAmount {
    type Output = AssetResult<ExtendedAmount>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl fmt::Display for ExtendedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.quantity, self.issuer)
    }
}
