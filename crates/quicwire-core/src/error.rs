//! Error types and results.
//!
//! All fallible codec operations return [`Result`], with [`ErrorKind`]
//! describing what went wrong. A decode error means the packet carrying the
//! bytes must be discarded; an encode error is a caller fault that surfaces
//! before anything reaches the network.

use std::{fmt, io};

/// Convenience result type over [`ErrorKind`].
pub type Result<T> = std::result::Result<T, ErrorKind>;

/// Errors that can occur while encoding or decoding wire data.
#[derive(Debug)]
pub enum ErrorKind {
    /// Failed to decode an enum discriminator from the wire.
    DecodingError(DecodingErrorKind),
    /// Wrapper around a std io error.
    IOError(io::Error),
    /// The input ended in the middle of a frame.
    UnexpectedEndOfInput,
    /// The enclosing packet number was still unset when encoding started.
    PacketNumberNotSet,
    /// The packet number length was still the unset sentinel.
    PacketNumberLenNotSet,
    /// The least unacked packet number lies above the enclosing packet's number.
    LeastUnackedExceedsPacketNumber,
    /// The received least unacked delta is larger than the enclosing packet's number.
    InvalidLeastUnackedDelta,
    /// The least unacked delta does not fit the configured packet number length.
    LeastUnackedDeltaTooLarge,
    /// The reason phrase does not fit its length prefix.
    ReasonPhraseTooLong,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::DecodingError(kind) => {
                write!(fmt, "Could not decode the {} from the wire.", kind)
            }
            ErrorKind::IOError(e) => write!(fmt, "An IO error occurred. Reason: {}.", e),
            ErrorKind::UnexpectedEndOfInput => {
                write!(fmt, "The input ended in the middle of a frame.")
            }
            ErrorKind::PacketNumberNotSet => {
                write!(fmt, "The packet number of the enclosing packet is not set.")
            }
            ErrorKind::PacketNumberLenNotSet => {
                write!(fmt, "The packet number length of the enclosing packet is not set.")
            }
            ErrorKind::LeastUnackedExceedsPacketNumber => {
                write!(fmt, "The least unacked value is higher than the enclosing packet number.")
            }
            ErrorKind::InvalidLeastUnackedDelta => {
                write!(fmt, "The least unacked delta is larger than the enclosing packet number.")
            }
            ErrorKind::LeastUnackedDeltaTooLarge => {
                write!(fmt, "The least unacked delta does not fit the packet number length.")
            }
            ErrorKind::ReasonPhraseTooLong => {
                write!(fmt, "The reason phrase does not fit its length prefix.")
            }
        }
    }
}

impl std::error::Error for ErrorKind {}

impl From<io::Error> for ErrorKind {
    fn from(inner: io::Error) -> Self {
        match inner.kind() {
            io::ErrorKind::UnexpectedEof => ErrorKind::UnexpectedEndOfInput,
            _ => ErrorKind::IOError(inner),
        }
    }
}

/// Wire discriminators that can fail to decode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DecodingErrorKind {
    /// The frame type tag.
    FrameType,
    /// The packet number length.
    PacketNumberLen,
}

impl fmt::Display for DecodingErrorKind {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodingErrorKind::FrameType => write!(fmt, "frame type"),
            DecodingErrorKind::PacketNumberLen => write!(fmt, "packet number length"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::ErrorKind;

    #[test]
    fn test_unexpected_eof_classification() {
        let eof = io::Error::new(io::ErrorKind::UnexpectedEof, "eof");
        assert!(matches!(ErrorKind::from(eof), ErrorKind::UnexpectedEndOfInput));

        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(ErrorKind::from(denied), ErrorKind::IOError(_)));
    }
}
