use core::{fmt, str::FromStr};

use crate::{Error, Result};

/// A validated, non-empty string of binary digits, most-significant bit
/// first.
///
/// The digits are kept exactly as given (leading zeros included), since the
/// literal's length carries meaning for the signed and floating-point
/// readings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BinaryLiteral(String);

#[allow(clippy::len_without_is_empty)]
impl BinaryLiteral {
    // ───────────────────────────── Constructors ─────────────────────────────

    /// Validates `raw` as a binary literal.
    ///
    /// Fails with [`Error::InvalidBinaryDigits`] if `raw` is empty or holds
    /// anything other than `'0'` and `'1'` (whitespace and signs included).
    pub fn parse(raw: impl AsRef<str>) -> Result<Self> {
        let raw = raw.as_ref();
        if raw.is_empty() || !raw.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(Error::InvalidBinaryDigits(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// The shortest literal whose unsigned reading is `value` (`"0"` for 0).
    pub fn from_unsigned(value: u128) -> Self {
        Self(format!("{:b}", value))
    }

    // ───────────────────────────── Accessors ────────────────────────────────

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The bits, most-significant first.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.bytes().map(|b| b == b'1')
    }

    /// The most-significant (leading) bit.
    pub fn msb(&self) -> bool {
        self.0.starts_with('1')
    }

    /// The bit pattern left-padded with zeros to whole octets, big-endian.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let pad = (8 - self.len() % 8) % 8;
        let mut bytes = Vec::with_capacity((self.len() + pad) / 8);
        let mut acc = 0u8;
        for (i, bit) in
            core::iter::repeat_n(false, pad).chain(self.bits()).enumerate()
        {
            acc = (acc << 1) | bit as u8;
            if i % 8 == 7 {
                bytes.push(acc);
                acc = 0;
            }
        }
        bytes
    }

    /// The raw bit pattern, left-padded to whole nibbles, as uppercase hex.
    ///
    /// Unlike [`crate::NumeralResult::hex`], this keeps leading zero nibbles
    /// and ignores the mode: `00001010` renders as `0A`.
    pub fn pattern_hex(&self) -> String {
        let encoded = hex::encode_upper(self.to_be_bytes());
        let nibbles = self.len().div_ceil(4);
        encoded[encoded.len() - nibbles..].to_string()
    }
}

impl FromStr for BinaryLiteral {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for BinaryLiteral {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl AsRef<str> for BinaryLiteral {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BinaryLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_binary_input() {
        for raw in ["", "102", "abc", " 101", "-1", "+1", "10 1"] {
            assert!(matches!(
                BinaryLiteral::parse(raw),
                Err(Error::InvalidBinaryDigits(ref s)) if s == raw
            ));
        }
    }

    #[test]
    fn pads_pattern_to_octets_and_nibbles() {
        let lit = BinaryLiteral::parse("1010").unwrap();
        assert_eq!(lit.to_be_bytes(), vec![0x0A]);
        assert_eq!(lit.pattern_hex(), "A");

        let lit = BinaryLiteral::parse("100000001").unwrap();
        assert_eq!(lit.to_be_bytes(), vec![0x01, 0x01]);
        assert_eq!(lit.pattern_hex(), "101");
    }

    #[test]
    fn from_unsigned_is_minimal() {
        assert_eq!(BinaryLiteral::from_unsigned(0).as_str(), "0");
        assert_eq!(BinaryLiteral::from_unsigned(11).as_str(), "1011");
        assert_eq!(BinaryLiteral::from_unsigned(u128::MAX).len(), 128);
    }
}
