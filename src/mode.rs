use core::{fmt, str::FromStr};

use crate::{Error, Result};

/// Numeral encoding used to interpret a binary literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Plain base-2 magnitude (`STANDARD`, alias `UNSIGNED`)
    Unsigned,
    /// Two's-complement signed integer (`SIGNED`)
    Signed,
    /// 32-bit IEEE‑754-style single precision (`FLOATING_POINT`, alias `FLOAT`)
    FloatingPoint,
}

impl Mode {
    pub const ALL: [Mode; 3] =
        [Self::Unsigned, Self::Signed, Self::FloatingPoint];

    /// Canonical name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Unsigned => "STANDARD",
            Self::Signed => "SIGNED",
            Self::FloatingPoint => "FLOATING_POINT",
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    /// Case-insensitive. Unrecognized names are an error, never a fallback.
    fn from_str(s: &str) -> Result<Self> {
        const NAMES: [(&str, Mode); 5] = [
            ("STANDARD", Mode::Unsigned),
            ("UNSIGNED", Mode::Unsigned),
            ("SIGNED", Mode::Signed),
            ("FLOATING_POINT", Mode::FloatingPoint),
            ("FLOAT", Mode::FloatingPoint),
        ];
        NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, mode)| mode)
            .ok_or_else(|| Error::UnknownMode(s.to_string()))
    }
}

impl serde::Serialize for Mode {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
