// ============================================================================
// Amount
// Range-checked fixed-point quantity of a single symbol
// ============================================================================

use super::errors::{AssetError, AssetResult, Operation};
use crate::domain::Symbol;
use crate::interfaces::Printer;
use arrayvec::ArrayString;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt::{self, Write as _};
use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A quantity of one symbol, stored as `value × 10^precision` in an `i64`.
///
/// # Invariant
/// Every checked constructor and mutator keeps the symbol valid and the
/// magnitude inside `[-MAX_AMOUNT, MAX_AMOUNT]`. The range is symmetric and
/// one bit narrower than `i64`, so negation never overflows.
///
/// Two escape hatches skip the checks: `Default` (zero of the empty symbol)
/// and [`Amount::from_raw_parts`].
///
/// # Serde
/// Deserialization re-validates through [`Amount::new`]. A default amount
/// serializes fine but carries the empty, invalid symbol, so it fails to
/// deserialize with `InvalidSymbol`. The same holds for
/// `ExtendedAmount::default()`.
///
/// # Comparison
/// `==` is structural (magnitude and symbol). Ordering only makes sense
/// between amounts of the same symbol, so it is exposed through the
/// fallible `try_*` methods instead of `PartialOrd`.
///
/// # Example
/// ```
/// use ledger_asset::domain::Symbol;
/// use ledger_asset::numeric::Amount;
///
/// let eos = Symbol::parse("EOS", 4)?;
/// let a = Amount::new(15_000, eos)?;
/// let b = Amount::new(2_500, eos)?;
/// assert_eq!((a + b)?.to_string(), "1.7500 EOS");
/// assert!(b.try_lt(&a)?);
/// # Ok::<(), ledger_asset::numeric::AssetError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "AmountParts")
)]
pub struct Amount {
    amount: i64,
    symbol: Symbol,
}

/// Classify a wide arithmetic result against the amount range.
fn bounded(value: i128, op: Operation) -> AssetResult<i64> {
    const MAX: i128 = Amount::MAX_AMOUNT as i128;

    if value > MAX {
        tracing::trace!(%op, result = %value, "amount arithmetic overflow");
        Err(AssetError::RangeOverflow { op })
    } else if value < -MAX {
        tracing::trace!(%op, result = %value, "amount arithmetic underflow");
        Err(AssetError::RangeUnderflow { op })
    } else {
        Ok(value as i64)
    }
}

/// Truncating division with both native failure cases reported.
fn divide(dividend: i64, divisor: i64) -> AssetResult<i64> {
    if divisor == 0 {
        tracing::trace!(dividend, "amount division by zero");
        return Err(AssetError::DivideByZero);
    }
    dividend.checked_div(divisor).ok_or_else(|| {
        tracing::trace!(dividend, divisor, "amount signed division overflow");
        AssetError::SignedOverflow
    })
}

impl Amount {
    /// Largest magnitude an amount may hold (2^62 - 1)
    pub const MAX_AMOUNT: i64 = (1 << 62) - 1;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an amount, enforcing the invariant.
    ///
    /// # Errors
    /// - `OutOfRange` if `|amount| > MAX_AMOUNT`
    /// - `InvalidSymbol` if the symbol's ticker code is not valid
    ///
    /// The range is checked first, so an out-of-range magnitude reports
    /// `OutOfRange` even when the symbol is also invalid.
    pub fn new(amount: i64, symbol: Symbol) -> AssetResult<Self> {
        let value = Self { amount, symbol };
        if !value.is_amount_within_range() {
            tracing::debug!(amount, "rejected amount: magnitude out of range");
            return Err(AssetError::OutOfRange);
        }
        if !symbol.is_valid() {
            tracing::debug!(symbol = symbol.raw(), "rejected amount: invalid symbol");
            return Err(AssetError::InvalidSymbol);
        }
        Ok(value)
    }

    /// Create from parts without any validation.
    ///
    /// Mirrors the raw constructors of [`Symbol`] and the ticker code. The
    /// result may violate the invariant; use [`Amount::new`] unless the
    /// parts are already known to be good.
    #[inline]
    pub const fn from_raw_parts(amount: i64, symbol: Symbol) -> Self {
        Self { amount, symbol }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The scaled magnitude
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    #[inline]
    pub const fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Check `-MAX_AMOUNT <= amount <= MAX_AMOUNT`.
    #[inline]
    pub const fn is_amount_within_range(&self) -> bool {
        -Self::MAX_AMOUNT <= self.amount && self.amount <= Self::MAX_AMOUNT
    }

    /// Check the symbol. The magnitude range is checked separately by
    /// [`Amount::is_amount_within_range`].
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.symbol.is_valid()
    }

    /// Replace the magnitude.
    ///
    /// # Errors
    /// Returns `OutOfRange` and leaves the amount untouched if
    /// `|amount| > MAX_AMOUNT`.
    pub fn set_amount(&mut self, amount: i64) -> AssetResult<()> {
        if !(-Self::MAX_AMOUNT..=Self::MAX_AMOUNT).contains(&amount) {
            return Err(AssetError::OutOfRange);
        }
        self.amount = amount;
        Ok(())
    }

    fn ensure_same_symbol(&self, other: &Self, op: Operation) -> AssetResult<()> {
        if self.symbol == other.symbol {
            Ok(())
        } else {
            Err(AssetError::SymbolMismatch { op })
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// `SymbolMismatch` on different symbols, `RangeOverflow` or
    /// `RangeUnderflow` if the sum leaves the amount range.
    pub fn checked_add(self, rhs: Self) -> AssetResult<Self> {
        let op = Operation::Addition;
        self.ensure_same_symbol(&rhs, op)?;
        let amount = bounded(i128::from(self.amount) + i128::from(rhs.amount), op)?;
        Ok(Self { amount, ..self })
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// `SymbolMismatch` on different symbols, `RangeOverflow` or
    /// `RangeUnderflow` if the difference leaves the amount range.
    pub fn checked_sub(self, rhs: Self) -> AssetResult<Self> {
        let op = Operation::Subtraction;
        self.ensure_same_symbol(&rhs, op)?;
        let amount = bounded(i128::from(self.amount) - i128::from(rhs.amount), op)?;
        Ok(Self { amount, ..self })
    }

    /// Multiply by an integer.
    ///
    /// The product is formed in `i128`, so only the final range check can fail.
    pub fn checked_mul(self, rhs: i64) -> AssetResult<Self> {
        let amount = bounded(
            i128::from(self.amount) * i128::from(rhs),
            Operation::Multiplication,
        )?;
        Ok(Self { amount, ..self })
    }

    /// Divide by an integer, truncating toward zero.
    ///
    /// # Errors
    /// - `DivideByZero` if `rhs == 0`
    /// - `SignedOverflow` for `i64::MIN / -1`
    pub fn checked_div(self, rhs: i64) -> AssetResult<Self> {
        let amount = divide(self.amount, rhs)?;
        Ok(Self { amount, ..self })
    }

    /// Divide two amounts of the same symbol, yielding a plain ratio.
    ///
    /// # Errors
    /// `SymbolMismatch` on different symbols, then the failure modes of
    /// [`Amount::checked_div`].
    pub fn checked_div_amount(self, rhs: Self) -> AssetResult<i64> {
        self.ensure_same_symbol(&rhs, Operation::Division)?;
        divide(self.amount, rhs.amount)
    }

    // In-place variants: compute first, assign only on success.

    pub fn checked_add_assign(&mut self, rhs: Self) -> AssetResult<()> {
        *self = self.checked_add(rhs)?;
        Ok(())
    }

    pub fn checked_sub_assign(&mut self, rhs: Self) -> AssetResult<()> {
        *self = self.checked_sub(rhs)?;
        Ok(())
    }

    pub fn checked_mul_assign(&mut self, rhs: i64) -> AssetResult<()> {
        *self = self.checked_mul(rhs)?;
        Ok(())
    }

    pub fn checked_div_assign(&mut self, rhs: i64) -> AssetResult<()> {
        *self = self.checked_div(rhs)?;
        Ok(())
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare magnitudes of two amounts of the same symbol.
    ///
    /// # Errors
    /// Returns `SymbolMismatch` if the symbols differ.
    pub fn try_cmp(&self, other: &Self) -> AssetResult<Ordering> {
        self.ensure_same_symbol(other, Operation::Comparison)?;
        Ok(self.amount.cmp(&other.amount))
    }

    pub fn try_eq(&self, other: &Self) -> AssetResult<bool> {
        Ok(self.try_cmp(other)?.is_eq())
    }

    pub fn try_ne(&self, other: &Self) -> AssetResult<bool> {
        Ok(self.try_cmp(other)?.is_ne())
    }

    pub fn try_lt(&self, other: &Self) -> AssetResult<bool> {
        Ok(self.try_cmp(other)?.is_lt())
    }

    pub fn try_le(&self, other: &Self) -> AssetResult<bool> {
        Ok(self.try_cmp(other)?.is_le())
    }

    pub fn try_gt(&self, other: &Self) -> AssetResult<bool> {
        Ok(self.try_cmp(other)?.is_gt())
    }

    pub fn try_ge(&self, other: &Self) -> AssetResult<bool> {
        Ok(self.try_cmp(other)?.is_ge())
    }

    // ========================================================================
    // Output
    // ========================================================================

    /// Write the decimal rendering (same text as `Display`) to a printer.
    pub fn print<P: Printer + ?Sized>(&self, printer: &mut P) {
        printer.print(&self.to_string());
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// This is intended for API boundaries only. Returns `None` when the
    /// precision exceeds the 28 digits of scale `Decimal` supports.
    pub fn to_decimal(&self) -> Option<Decimal> {
        Decimal::try_new(self.amount, u32::from(self.symbol.precision())).ok()
    }
}

// ============================================================================
// Operator Implementations
// ============================================================================

impl Neg for Amount {
    type Output = Self;

    /// Never fails for amounts inside the range; `from_raw_parts` values at
    /// `i64::MIN` wrap.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            amount: self.amount.wrapping_neg(),
            ..self
        }
    }
}

impl Add for Amount {
    type Output = AssetResult<Amount>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl Sub for Amount {
    type Output = AssetResult<Amount>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl Mul<i64> for Amount {
    type Output = AssetResult<Amount>;

    #[inline]
    fn mul(self, rhs: i64) -> Self::Output {
        self.checked_mul(rhs)
    }
}

impl Div<i64> for Amount {
    type Output = AssetResult<Amount>;

    #[inline]
    fn div(self, rhs: i64) -> Self::Output {
        self.checked_div(rhs)
    }
}

impl Div for Amount {
    type Output = AssetResult<i64>;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div_amount(rhs)
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Amount {
    /// Renders `"<int>.<frac> <CODE>"`, e.g. `"-0.1 SYMBOLL"`.
    ///
    /// The magnitude is zero-padded to at least `precision + 1` digits so
    /// the integer part is never empty. Zero never carries a sign.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = usize::from(self.symbol.precision());

        // u64::MAX has 20 digits
        let mut digits = ArrayString::<20>::new();
        write!(digits, "{}", self.amount.unsigned_abs())?;
        let digits = digits.as_str();

        if self.amount < 0 {
            f.write_char('-')?;
        }
        if precision == 0 {
            return write!(f, "{} {}", digits, self.symbol.code());
        }

        if digits.len() > precision {
            let (int_part, frac_part) = digits.split_at(digits.len() - precision);
            write!(f, "{}.{}", int_part, frac_part)?;
        } else {
            // Pad the fraction on the left; the integer part is a single zero
            f.write_str("0.")?;
            for _ in digits.len()..precision {
                f.write_char('0')?;
            }
            f.write_str(digits)?;
        }
        write!(f, " {}", self.symbol.code())
    }
}

// ============================================================================
// Serde Validation
// ============================================================================

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct AmountParts {
    amount: i64,
    symbol: Symbol,
}

#[cfg(feature = "serde")]
impl TryFrom<AmountParts> for Amount {
    type Error = AssetError;

    fn try_from(parts: AmountParts) -> AssetResult<Self> {
        Self::new(parts.amount, parts.symbol)
    }
}

// ============================================================================
// Tests
// ============================================================================
