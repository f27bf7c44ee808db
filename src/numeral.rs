use core::fmt;

use dcbor::prelude::*;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::{BinaryLiteral, Error, Mode, decode};

/// The decoded value of a binary literal under one [`Mode`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeral {
    Unsigned(u128),
    Signed(i128),
    /// `magnitude` is `|value|` rounded to the nearest integer (half away
    /// from zero); the hex field is defined over it.
    Float { value: f64, magnitude: f64 },
}

impl Numeral {
    /// Minimal base-10 text: no leading zeros, `-` for negatives, one
    /// decimal place for floats.
    pub fn to_decimal_string(&self) -> String {
        match self {
            Self::Unsigned(v) => v.to_string(),
            Self::Signed(v) => v.to_string(),
            Self::Float { value, .. } => format!("{:.1}", value),
        }
    }

    /// Uppercase hex of the value's magnitude, no prefix or padding.
    ///
    /// Signed values render `|value|`, not their two's-complement pattern.
    pub fn to_hex_string(&self) -> String {
        match self {
            Self::Unsigned(v) => format!("{:X}", v),
            Self::Signed(v) => format!("{:X}", v.unsigned_abs()),
            Self::Float { magnitude, .. } => integral_f64_hex(*magnitude),
        }
    }
}

/// The outcome of decoding one literal: the literal, the mode it was read
/// under, the value, and its formatted hex.
#[derive(Debug, Clone, PartialEq)]
pub struct NumeralResult {
    literal: BinaryLiteral,
    mode: Mode,
    numeral: Numeral,
    hex: String,
}

impl NumeralResult {
    pub(crate) fn new(
        literal: BinaryLiteral,
        mode: Mode,
        numeral: Numeral,
    ) -> Self {
        let hex = numeral.to_hex_string();
        Self { literal, mode, numeral, hex }
    }

    pub fn literal(&self) -> &BinaryLiteral {
        &self.literal
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn numeral(&self) -> Numeral {
        self.numeral
    }

    /// The decimal field, formatted per [`Numeral::to_decimal_string`].
    pub fn decimal(&self) -> String {
        self.numeral.to_decimal_string()
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }
}

// ─────────────────────────── CBOR Implementation ────────────────────────────

impl From<NumeralResult> for CBOR {
    fn from(value: NumeralResult) -> Self {
        let mut map = Map::new();
        map.insert("bits", value.literal.as_str());
        map.insert("mode", value.mode.name());
        map.insert("decimal", value.decimal());
        map.insert("hex", value.hex);
        CBOR::from(map)
    }
}

impl TryFrom<CBOR> for NumeralResult {
    type Error = dcbor::Error;

    /// Re-decodes `bits` under `mode` and requires the carried `decimal` and
    /// `hex` fields to agree with the recomputed ones.
    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        let map = cbor.try_into_map()?;
        let bits: String = map.extract("bits")?;
        let mode: String = map.extract("mode")?;
        let decimal: String = map.extract("decimal")?;
        let hex: String = map.extract("hex")?;

        let result = decode(&bits, mode.parse()?)?;
        if result.decimal() != decimal {
            return Err(Error::InconsistentResult { field: "decimal" }.into());
        }
        if result.hex != hex {
            return Err(Error::InconsistentResult { field: "hex" }.into());
        }
        Ok(result)
    }
}

// ─────────────────────────────── Serialize ──────────────────────────────────

impl Serialize for NumeralResult {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> core::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("NumeralResult", 4)?;
        s.serialize_field("bits", self.literal.as_str())?;
        s.serialize_field("mode", &self.mode)?;
        s.serialize_field("decimal", &self.decimal())?;
        s.serialize_field("hex", &self.hex)?;
        s.end()
    }
}

// ───────────────────────────────── Display ──────────────────────────────────

impl fmt::Display for NumeralResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]: decimal={} hex={}",
            self.literal,
            self.mode,
            self.decimal(),
            self.hex,
        )
    }
}

// ────────────────────────────── Internals ───────────────────────────────────

/// Exact uppercase hex of a finite, non-negative, integral `f64`, which may
/// exceed `u128::MAX`.
fn integral_f64_hex(value: f64) -> String {
    if value < 1.0 {
        return "0".to_string();
    }
    let bits = value.to_bits();
    // 52 fraction bits plus the implicit leading 1
    let significand = (bits & 0x000F_FFFF_FFFF_FFFF) | (1u64 << 52);
    let shift = ((bits >> 52) & 0x7FF) as i32 - 1075; // bias 1023 + 52
    if shift <= 0 {
        return format!("{:X}", significand >> -shift);
    }
    // Each whole nibble of shift is a trailing hex zero.
    let head = (significand as u128) << (shift % 4);
    format!("{:X}{}", head, "0".repeat((shift / 4) as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_f64_hex_matches_integer_hex() {
        let samples = [
            0u128,
            1,
            2,
            10,
            15,
            16,
            255,
            1 << 52,
            (1 << 53) - 1,
            1 << 60,
            3 << 70,
        ];
        for v in samples {
            assert_eq!(integral_f64_hex(v as f64), format!("{:X}", v));
        }
    }

    #[test]
    fn integral_f64_hex_beyond_u128() {
        // 2^128
        assert_eq!(
            integral_f64_hex(2f64.powi(128)),
            format!("1{}", "0".repeat(32))
        );
        // 3 · 2^127 = 0x18 followed by 31 zero nibbles
        assert_eq!(
            integral_f64_hex(3.0 * 2f64.powi(127)),
            format!("18{}", "0".repeat(31))
        );
    }

    #[test]
    fn signed_hex_is_absolute_value() {
        assert_eq!(Numeral::Signed(-16).to_hex_string(), "10");
        assert_eq!(
            Numeral::Signed(i128::MIN).to_hex_string(),
            format!("8{}", "0".repeat(31))
        );
    }
}
