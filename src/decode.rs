use crate::{BinaryLiteral, Error, Mode, Numeral, NumeralResult, Result};

/// Widest literal accepted by the integer readings.
pub const MAX_INTEGER_BITS: usize = 128;

/// Exact literal width of the floating-point reading.
pub const FLOAT32_BITS: usize = 32;

const FLOAT32_EXPONENT_BIAS: i32 = 127;
const FLOAT32_FRACTION_BITS: u32 = 23;

// ───────────────────────────── Entry points ─────────────────────────────────

/// Validates `raw` as a binary literal and decodes it under `mode`.
pub fn decode(raw: impl AsRef<str>, mode: Mode) -> Result<NumeralResult> {
    decode_literal(&BinaryLiteral::parse(raw)?, mode)
}

/// Like [`decode`], with the mode given by name (see [`Mode`]'s `FromStr`).
pub fn decode_str(raw: impl AsRef<str>, mode: &str) -> Result<NumeralResult> {
    decode(raw, mode.parse()?)
}

/// Decodes an already validated literal under `mode`.
pub fn decode_literal(
    literal: &BinaryLiteral,
    mode: Mode,
) -> Result<NumeralResult> {
    let numeral = match mode {
        Mode::Unsigned => Numeral::Unsigned(decode_unsigned(literal)?),
        Mode::Signed => Numeral::Signed(decode_signed(literal)?),
        Mode::FloatingPoint => {
            let value = decode_float32(literal)?;
            Numeral::Float { value, magnitude: value.abs().round() }
        }
    };
    Ok(NumeralResult::new(literal.clone(), mode, numeral))
}

// ─────────────────────────────── Readings ───────────────────────────────────

/// Base-2 magnitude, most-significant bit first.
pub fn decode_unsigned(literal: &BinaryLiteral) -> Result<u128> {
    check_integer_width(literal)?;
    Ok(fold_bits(literal.bits()))
}

/// Two's complement over the literal's own width: a leading `1` reads as
/// `-(M + 1)` where `M` is the unsigned reading of the inverted bits.
pub fn decode_signed(literal: &BinaryLiteral) -> Result<i128> {
    check_integer_width(literal)?;
    if !literal.msb() {
        // Leading 0 in at most 128 bits keeps the value below 2^127.
        return Ok(fold_bits(literal.bits()) as i128);
    }
    let inverted = fold_bits(literal.bits().map(|bit| !bit));
    Ok(-(inverted as i128) - 1)
}

/// Single-precision reading of an exactly 32-bit literal.
pub fn decode_float32(literal: &BinaryLiteral) -> Result<f64> {
    Ok(Float32Fields::from_literal(literal)?.value())
}

/// The sign, exponent, and fraction fields of a 32-bit literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Float32Fields {
    /// Bit 0; `true` is negative.
    pub sign: bool,
    /// Bits 1–8, biased by 127.
    pub exponent: u8,
    /// Bits 9–31.
    pub fraction: u32,
}

impl Float32Fields {
    /// Splits a literal of exactly 32 bits. Shorter literals fail with
    /// [`Error::InsufficientBitsForFloat`]; longer ones with
    /// [`Error::InputTooLong`] rather than being truncated.
    pub fn from_literal(literal: &BinaryLiteral) -> Result<Self> {
        let len = literal.len();
        if len < FLOAT32_BITS {
            return Err(Error::InsufficientBitsForFloat {
                len,
                required: FLOAT32_BITS,
            });
        }
        if len > FLOAT32_BITS {
            return Err(Error::InputTooLong { len, max: FLOAT32_BITS });
        }
        let bits = fold_bits(literal.bits()) as u32;
        Ok(Self {
            sign: bits >> 31 == 1,
            exponent: ((bits >> 23) & 0xFF) as u8,
            fraction: bits & 0x007F_FFFF,
        })
    }

    /// `±(1 + fraction / 2^23) · 2^(exponent − 127)`.
    ///
    /// Applied to every exponent value: there is no subnormal, infinity, or
    /// NaN reading, so the result is always finite and non-zero.
    pub fn value(&self) -> f64 {
        let mantissa = 1.0
            + self.fraction as f64 / (1u32 << FLOAT32_FRACTION_BITS) as f64;
        let scale = 2f64.powi(self.exponent as i32 - FLOAT32_EXPONENT_BIAS);
        let magnitude = mantissa * scale;
        if self.sign { -magnitude } else { magnitude }
    }
}

// ────────────────────────────── Internals ───────────────────────────────────

fn check_integer_width(literal: &BinaryLiteral) -> Result<()> {
    if literal.len() > MAX_INTEGER_BITS {
        return Err(Error::InputTooLong {
            len: literal.len(),
            max: MAX_INTEGER_BITS,
        });
    }
    Ok(())
}

/// Callers guarantee at most 128 bits.
fn fold_bits(bits: impl Iterator<Item = bool>) -> u128 {
    bits.fold(0u128, |acc, bit| (acc << 1) | bit as u128)
}
