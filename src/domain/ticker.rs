// ============================================================================
// Ticker Code
// Up to seven uppercase ASCII characters packed into a u64
// ============================================================================

use crate::numeric::{AssetError, AssetResult};
use std::fmt::{self, Write as _};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Currency ticker packed into a `u64`.
///
/// Character `i` lives in byte `i` (counted from the least significant
/// byte), so `"EOS"` is stored as `0x534F45`. Byte 7 is never part of a
/// ticker.
///
/// Two entry points exist on purpose: [`TickerCode::from_raw`] stores any
/// bit pattern unchecked, while parsing a string validates length and
/// character set. Use [`TickerCode::is_valid`] to check raw values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[repr(transparent)]
pub struct TickerCode(u64);

impl TickerCode {
    /// Maximum number of characters in a ticker
    pub const MAX_LEN: usize = 7;

    /// The empty (all-zero) ticker
    pub const EMPTY: Self = Self(0);

    /// Create from a raw packed value without validation.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw packed value.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Check if no character is stored.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check the packing rules: one to seven characters in `'A'..='Z'`,
    /// stored contiguously from byte 0, with every byte after the last
    /// character zero.
    pub const fn is_valid(self) -> bool {
        let mut sym = self.0;
        if sym == 0 || sym >> 56 != 0 {
            return false;
        }

        let mut i = 0;
        while i < Self::MAX_LEN {
            let c = (sym & 0xFF) as u8;
            if c == 0 {
                // No gaps: everything above the first zero byte must be zero too
                return sym == 0;
            }
            if !c.is_ascii_uppercase() {
                return false;
            }
            sym >>= 8;
            i += 1;
        }
        true
    }

    /// Number of leading non-zero bytes.
    pub const fn length(self) -> usize {
        let mut sym = self.0;
        let mut len = 0;
        while len < Self::MAX_LEN && sym & 0xFF != 0 {
            len += 1;
            sym >>= 8;
        }
        len
    }

    /// Iterate over the leading non-zero bytes in position order.
    fn bytes(self) -> impl Iterator<Item = u8> {
        (0..self.length()).map(move |i| (self.0 >> (8 * i)) as u8)
    }
}

impl fmt::Display for TickerCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.bytes() {
            f.write_char(char::from(byte))?;
        }
        Ok(())
    }
}

impl FromStr for TickerCode {
    type Err = AssetError;

    /// Parse a ticker such as `"EOS"`.
    ///
    /// The empty string yields [`TickerCode::EMPTY`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() > Self::MAX_LEN {
            tracing::debug!(ticker = s, "rejected ticker: too long");
            return Err(AssetError::InvalidFormat(
                "string is too long to be a valid symbol code",
            ));
        }

        let mut value = 0u64;
        for (i, byte) in s.bytes().enumerate() {
            if !byte.is_ascii_uppercase() {
                tracing::debug!(ticker = s, "rejected ticker: invalid character");
                return Err(AssetError::InvalidFormat(
                    "only uppercase letters allowed in symbol code string",
                ));
            }
            value |= u64::from(byte) << (8 * i);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for TickerCode {
    type Error = AssetError;

    fn try_from(s: &str) -> AssetResult<Self> {
        s.parse()
    }
}

impl From<TickerCode> for u64 {
    fn from(code: TickerCode) -> Self {
        code.0
    }
}
