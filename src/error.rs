//! The single domain-error type shared by every layer of the codec.

/// A domain error: either a pulse train that does not match what a decoder
/// expects, or textual input that does not parse as a command.
///
/// Both variants carry a message naming the failing check (e.g. "invalid
/// leading pulse length: 1273", "invalid NEC xored data") so a caller can
/// show useful diagnostics without the codec doing any logging or I/O of
/// its own.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A pulse train failed a timing, length, or integrity check.
    #[error("invalid IR data: {0}")]
    InvalidData(String),

    /// Textual `protocol:key=value,...` or `raw:...` input failed to parse.
    #[error("invalid command format: {0}")]
    InvalidFormat(String),
}

impl Error {
    pub(crate) fn data(msg: impl Into<String>) -> Self {
        Error::InvalidData(msg.into())
    }

    pub(crate) fn format(msg: impl Into<String>) -> Self {
        Error::InvalidFormat(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
