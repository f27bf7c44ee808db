#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("CBOR error ({0})")]
    Cbor(#[from] dcbor::Error),

    #[error("invalid binary digits: {0:?} (expected a non-empty string of 0s and 1s)")]
    InvalidBinaryDigits(String),

    #[error("input too long: {len} bits exceeds the supported maximum of {max} bits")]
    InputTooLong { len: usize, max: usize },

    #[error("insufficient bits for float: expected {required} bits, got {len} bits")]
    InsufficientBitsForFloat { len: usize, required: usize },

    #[error("unknown mode: {0:?}")]
    UnknownMode(String),

    #[error("inconsistent result: encoded {field} does not match its bits")]
    InconsistentResult { field: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for String {
    fn from(err: Error) -> Self { err.to_string() }
}

impl From<Error> for dcbor::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Cbor(err) => err,
            _ => dcbor::Error::msg(err),
        }
    }
}
