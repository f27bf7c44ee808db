//! Reinterpretation of Binary Digit Strings as Numerals
//!
//! A string of `0`s and `1`s (most-significant bit first) is read under one
//! of three [`Mode`]s and returned as a [`NumeralResult`] carrying a decimal
//! and an uppercase hexadecimal rendering of the value:
//!
//! - `STANDARD` / `UNSIGNED`: base-2 magnitude, up to 128 bits.
//! - `SIGNED`: two's complement over the literal's own width, up to 128 bits.
//!   Its hex field is the hex of `|value|`, **not** the two's-complement bit
//!   pattern.
//! - `FLOATING_POINT` / `FLOAT`: exactly 32 bits, read as sign, 8-bit
//!   exponent biased by 127, and 23-bit fraction. No subnormal, infinity, or
//!   NaN handling. Its hex field is the hex of the value's magnitude rounded
//!   to the nearest integer.
//!
//! Decoding is a pure function; every rejected input is reported as a named
//! [`Error`].
//!
//! ```
//! use binary_numeral::{Mode, decode};
//!
//! let r = decode("1011", Mode::Unsigned).unwrap();
//! assert_eq!((r.decimal().as_str(), r.hex()), ("11", "B"));
//!
//! let r = decode("11110000", Mode::Signed).unwrap();
//! assert_eq!((r.decimal().as_str(), r.hex()), ("-16", "10"));
//! ```

mod binary_literal;
pub use binary_literal::*;
mod mode;
pub use mode::*;
mod decode;
pub use decode::*;
mod numeral;
pub use numeral::*;
mod error;
pub use error::*;
