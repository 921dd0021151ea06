//! Error type shared by every codec entry point.

use thiserror::Error;

/// Why an encode or decode call produced nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Byte outside the base58 alphabet at `index` of the input.
    #[error("invalid base58 character 0x{byte:02x} at position {index}")]
    InvalidChar {
        /// Offset into the input string.
        index: usize,
        /// The offending byte.
        byte: u8,
    },

    /// Flag bits other than a single recognized flag.
    #[error("invalid flags 0x{0:x}")]
    InvalidFlags(u32),

    /// Nothing to encode, or nothing to decode.
    #[error("empty input")]
    Empty,

    /// `ChecksumReserved` buffer has no room for both a payload and the checksum.
    #[error("buffer of {len} bytes cannot hold a payload and a reserved checksum")]
    InsufficientReserved {
        /// Length of the caller's buffer.
        len: usize,
    },

    /// Decoded data is too short to carry a payload and checksum.
    #[error("decoded data is {0} bytes, too short for base58check")]
    TooShort(usize),

    /// Trailing checksum does not match the double hash of the payload.
    #[error("base58check checksum {actual:02x?} does not match expected {expected:02x?}")]
    ChecksumMismatch {
        /// Checksum recomputed over the payload.
        expected: [u8; 4],
        /// Checksum carried by the input.
        actual: [u8; 4],
    },

    /// Output buffer cannot hold the decoded bytes.
    #[error("output buffer too small: need {required} bytes, have {capacity}")]
    BufferTooSmall {
        /// Bytes the decoded result occupies.
        required: usize,
        /// Length of the caller's buffer.
        capacity: usize,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
