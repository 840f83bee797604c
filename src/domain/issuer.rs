// ============================================================================
// Issuer Identifier
// Opaque 64-bit account identifier with a base-32 name encoding
// ============================================================================

use crate::numeric::{AssetError, AssetResult};
use arrayvec::ArrayString;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Base-32 alphabet of account names, indexed by 5-bit value
const CHARMAP: &[u8; 32] = b".12345abcdefghijklmnopqrstuvwxyz";

/// Identifier of the account that issues a symbol.
///
/// The asset types only compare and order issuers by raw value. The string
/// form packs up to twelve 5-bit characters (most significant first) plus an
/// optional thirteenth 4-bit character, e.g. `"eosio.token"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[repr(transparent)]
pub struct IssuerId(u64);

impl IssuerId {
    /// Maximum number of characters in an issuer name
    pub const MAX_LEN: usize = 13;

    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Decode into a stack buffer, trailing `.` trimmed.
    pub fn to_array_string(self) -> ArrayString<13> {
        let mut buf = [b'.'; Self::MAX_LEN];
        let mut tmp = self.0;
        for i in 0..Self::MAX_LEN {
            let (mask, shift) = if i == 0 { (0x0F, 4) } else { (0x1F, 5) };
            buf[Self::MAX_LEN - 1 - i] = CHARMAP[(tmp & mask) as usize];
            tmp >>= shift;
        }

        let end = buf.iter().rposition(|&c| c != b'.').map_or(0, |p| p + 1);
        // CHARMAP is pure ASCII
        let mut name = ArrayString::from_byte_string(&buf).unwrap_or_default();
        name.truncate(end);
        name
    }
}

fn char_to_value(c: u8) -> AssetResult<u64> {
    match c {
        b'.' => Ok(0),
        b'1'..=b'5' => Ok(u64::from(c - b'1') + 1),
        b'a'..=b'z' => Ok(u64::from(c - b'a') + 6),
        _ => Err(AssetError::InvalidIssuer(
            "character is not in allowed character set for names",
        )),
    }
}

impl fmt::Display for IssuerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_array_string())
    }
}

impl FromStr for IssuerId {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() > Self::MAX_LEN {
            return Err(AssetError::InvalidIssuer(
                "string is too long to be a valid name",
            ));
        }
        if bytes.is_empty() {
            return Ok(Self(0));
        }

        let n = bytes.len().min(12);
        let mut value = 0u64;
        for &c in &bytes[..n] {
            value <<= 5;
            value |= char_to_value(c)?;
        }
        value <<= 4 + 5 * (12 - n as u32);

        if let Some(&last) = bytes.get(12) {
            let v = char_to_value(last)?;
            if v > 0x0F {
                return Err(AssetError::InvalidIssuer(
                    "thirteenth character in name cannot be a letter that comes after j",
                ));
            }
            value |= v;
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for IssuerId {
    type Error = AssetError;

    fn try_from(s: &str) -> AssetResult<Self> {
        s.parse()
    }
}
