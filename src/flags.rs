//! Per-call behavior selection.

use crate::error::{Error, Result};

/// How a call treats the trailing 4-byte checksum.
///
/// The raw entry points take the numeric form (`0`, `1`, `2`); any other bit
/// pattern is rejected before conversion work starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Flags {
    /// Plain base58, no checksum.
    #[default]
    None = 0,
    /// Append the checksum on encode; verify and strip it on decode.
    Checksum = 1,
    /// Encode only: the last 4 bytes of the buffer are scratch space the
    /// checksum is written into in place.
    ChecksumReserved = 2,
}

impl Flags {
    #[must_use]
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Parses raw flag bits.
    ///
    /// # Errors
    /// - `InvalidFlags(bits)` for anything but `0`, `1` or `2`.
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            0 => Ok(Self::None),
            1 => Ok(Self::Checksum),
            2 => Ok(Self::ChecksumReserved),
            _ => {
                tracing::debug!(bits, "rejecting unknown base58 flags");
                Err(Error::InvalidFlags(bits))
            }
        }
    }
}

impl TryFrom<u32> for Flags {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self> {
        Self::from_bits(bits)
    }
}
