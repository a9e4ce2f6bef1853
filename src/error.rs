//! Error types for encoding and decoding.

use snafu::Snafu;

use crate::NumericKind;

/// Transport error carried by [`CodecError::Io`].
#[cfg(feature = "std")]
pub type IoError = std::io::Error;

/// Transport error carried by [`CodecError::Io`].
///
/// Uninhabited without `std`: no stream operations exist to produce it.
#[cfg(not(feature = "std"))]
pub type IoError = core::convert::Infallible;

/// Error during encoding or decoding.
///
/// Every failure is reported before any byte of the destination is touched,
/// except for stream writes where the sink may have accepted part of the
/// value before failing.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
#[non_exhaustive]
pub enum CodecError {
    /// Buffer length differs from the width of the kind.
    #[snafu(display(
        "buffer size mismatch for {kind}: expected {expected} bytes, got {actual}"
    ))]
    BufferSizeMismatch {
        /// Kind being encoded or decoded.
        kind: NumericKind,
        /// Bytes required.
        expected: usize,
        /// Bytes supplied.
        actual: usize,
    },

    /// Stream ended before a whole value could be read.
    #[snafu(display(
        "unexpected end of stream decoding {kind}: needed {needed} bytes, read {read}"
    ))]
    UnexpectedEndOfStream {
        /// Kind being decoded.
        kind: NumericKind,
        /// Bytes required.
        needed: usize,
        /// Bytes read before end of input.
        read: usize,
    },

    /// Underlying stream reported a failure.
    #[snafu(display("I/O error transferring {kind}"))]
    Io {
        /// Kind being transferred.
        kind: NumericKind,
        /// Transport failure.
        source: IoError,
    },

    /// Runtime kind tag outside the supported set.
    #[snafu(display("invalid numeric kind tag {tag}"))]
    InvalidNumericKind {
        /// Offending tag.
        tag: u8,
    },
}

impl CodecError {
    /// Kind the failing operation was working on, when known.
    pub fn kind(&self) -> Option<NumericKind> {
        match self {
            Self::BufferSizeMismatch { kind, .. }
            | Self::UnexpectedEndOfStream { kind, .. }
            | Self::Io { kind, .. } => Some(*kind),
            Self::InvalidNumericKind { .. } => None,
        }
    }
}

/// Result type for codec operations.
pub type Result<T, E = CodecError> = core::result::Result<T, E>;
