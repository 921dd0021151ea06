//! Base58 decoding facade.
//! Every char is validated against the alphabet before conversion; the
//! optional checksum is the only integrity gate, so truncated, extended and
//! tampered strings all fail the same way.
//! Results are staged in wiped scratch space and copied out only once the
//! caller's buffer is known to be large enough.
use crate::checksum::{verify_and_strip, CHECKSUM_LEN};
use crate::convert::{digit_value, digits_to_bytes};
use crate::error::{Error, Result};
use crate::flags::Flags;
use zeroize::Zeroizing;

/// Decodes a base58 string (Bitcoin alphabet) to bytes, no checksum.
///
/// # Errors
/// - `Empty`: `input` is empty.
/// - `InvalidChar`: a char outside the alphabet.
#[inline]
pub fn decode(input: &str) -> Result<Vec<u8>> {
    decode_full(input.as_bytes(), Flags::None).map(|mut data| std::mem::take(&mut *data))
}

/// Decodes a `Base58Check` string, verifying and stripping the checksum.
///
/// # Errors
/// - `Empty`, `InvalidChar`: as [`decode`].
/// - `TooShort`: decoded data leaves no payload in front of the checksum.
/// - `ChecksumMismatch`: double-SHA256 of payload != trailing 4 bytes.
#[inline]
pub fn decode_check(input: &str) -> Result<Vec<u8>> {
    decode_full(input.as_bytes(), Flags::Checksum).map(|mut data| std::mem::take(&mut *data))
}

/// Decodes `input` into `output`, returning the number of bytes written
/// (checksum excluded with `Flags::Checksum`).
///
/// `output` is untouched on every error.
///
/// # Errors
/// - `InvalidFlags`: `Flags::ChecksumReserved` has no meaning when decoding.
/// - `BufferTooSmall`: `output` is shorter than the decoded result.
/// - Otherwise as [`decode`] / [`decode_check`].
pub fn decode_into(input: &str, flags: Flags, output: &mut [u8]) -> Result<usize> {
    let data = decode_full(input.as_bytes(), flags)?;
    write_into(&data, output)
}

/// Number of bytes [`decode_into`] would write for `input`.
///
/// # Errors
/// Same as [`decode_into`], minus `BufferTooSmall`.
pub fn decoded_len(input: &str, flags: Flags) -> Result<usize> {
    decode_full(input.as_bytes(), flags).map(|data| data.len())
}

/// Raw-flag entry point: `flags` is `0` (none) or `1` (checksum); the output
/// capacity is `output.len()`.
///
/// Takes bytes rather than `&str` so non-UTF-8 input can be handed over and rejected.
///
/// # Errors
/// - `InvalidFlags`: any other flag value, checked before any work.
/// - Otherwise as [`decode_into`].
pub fn base58_to_bytes(input: &[u8], flags: u32, output: &mut [u8]) -> Result<usize> {
    let flags = Flags::from_bits(flags)?;
    let data = decode_full(input, flags)?;
    write_into(&data, output)
}

fn write_into(data: &[u8], output: &mut [u8]) -> Result<usize> {
    if data.len() > output.len() {
        tracing::debug!(
            required = data.len(),
            capacity = output.len(),
            "base58 output buffer too small"
        );
        return Err(Error::BufferTooSmall {
            required: data.len(),
            capacity: output.len(),
        });
    }
    output[..data.len()].copy_from_slice(data);
    Ok(data.len())
}

fn decode_full(input: &[u8], flags: Flags) -> Result<Zeroizing<Vec<u8>>> {
    if flags == Flags::ChecksumReserved {
        tracing::debug!("reserved checksum space only applies to encoding");
        return Err(Error::InvalidFlags(flags.bits()));
    }
    if input.is_empty() {
        tracing::debug!("rejecting empty base58 input");
        return Err(Error::Empty);
    }
    // Validate chars upfront
    let digits: Zeroizing<Vec<u8>> = Zeroizing::new(
        input
            .iter()
            .enumerate()
            .map(|(index, &byte)| {
                digit_value(byte).ok_or_else(|| {
                    tracing::debug!(index, byte, "invalid base58 character");
                    Error::InvalidChar { index, byte }
                })
            })
            .collect::<Result<Vec<u8>>>()?,
    );
    let mut output = Zeroizing::new(digits_to_bytes(&digits)?);
    if flags == Flags::Checksum {
        if output.len() <= CHECKSUM_LEN {
            tracing::debug!(len = output.len(), "base58check data too short");
            return Err(Error::TooShort(output.len()));
        }
        let payload_len = verify_and_strip(&output)?.len();
        output.truncate(payload_len);
    }
    Ok(output)
}
