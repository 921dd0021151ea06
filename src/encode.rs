//! Base58 encoding facade.
//! Leading zero bytes come out as '1's; the checksum is either appended to a
//! scratch copy or written into space the caller reserved at the end of the buffer.
use crate::checksum::{append_checksum, checksum, CHECKSUM_LEN};
use crate::convert::bytes_to_digits;
use crate::error::{Error, Result};
use crate::flags::Flags;
use crate::ALPHABET;
use zeroize::Zeroizing;

fn render(data: &[u8]) -> String {
    let digits = Zeroizing::new(bytes_to_digits(data));
    digits.iter().map(|&d| ALPHABET[d as usize] as char).collect()
}

fn reject_empty() -> Error {
    tracing::debug!("rejecting empty base58 payload");
    Error::Empty
}

/// Encodes `input` as plain base58 (no checksum).
///
/// # Errors
/// - `Empty`: `input` has no bytes.
#[inline]
pub fn encode(input: &[u8]) -> Result<String> {
    if input.is_empty() {
        return Err(reject_empty());
    }
    Ok(render(input))
}

/// Encodes `payload` as `Base58Check`, appending the checksum in a scratch copy.
///
/// # Errors
/// - `Empty`: `payload` has no bytes.
pub fn encode_check(payload: &[u8]) -> Result<String> {
    if payload.is_empty() {
        return Err(reject_empty());
    }
    let data = Zeroizing::new(append_checksum(payload));
    Ok(render(&data))
}

/// Encodes `buf` as `Base58Check`, treating its last `CHECKSUM_LEN` bytes as
/// reserved: the checksum of the preceding bytes is written there in place.
///
/// # Errors
/// - `Empty`: `buf` has no bytes.
/// - `InsufficientReserved`: `buf` has no payload byte in front of the reserved space.
pub fn encode_check_reserved(buf: &mut [u8]) -> Result<String> {
    if buf.is_empty() {
        return Err(reject_empty());
    }
    if buf.len() <= CHECKSUM_LEN {
        tracing::debug!(len = buf.len(), "no payload in front of reserved checksum space");
        return Err(Error::InsufficientReserved { len: buf.len() });
    }
    let (payload, reserved) = buf.split_at_mut(buf.len() - CHECKSUM_LEN);
    reserved.copy_from_slice(&checksum(payload));
    Ok(render(buf))
}

/// Encodes `buf` according to `flags`.
///
/// `buf` is only written to with `Flags::ChecksumReserved`.
///
/// # Errors
/// See [`encode`], [`encode_check`] and [`encode_check_reserved`].
pub fn encode_with(buf: &mut [u8], flags: Flags) -> Result<String> {
    match flags {
        Flags::None => encode(buf),
        Flags::Checksum => encode_check(buf),
        Flags::ChecksumReserved => encode_check_reserved(buf),
    }
}

/// Raw-flag entry point: `flags` is `0` (none), `1` (checksum) or `2`
/// (checksum into reserved trailing space).
///
/// `buf` is mutable for every flag because `2` writes into it; only that flag
/// modifies it. Callers holding a shared `&[u8]` should use [`encode`] or
/// [`encode_check`] instead of copying.
///
/// # Errors
/// - `InvalidFlags`: any other flag value, checked before any work.
/// - Otherwise as [`encode_with`].
pub fn base58_from_bytes(buf: &mut [u8], flags: u32) -> Result<String> {
    let flags = Flags::from_bits(flags)?;
    encode_with(buf, flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn encode_known() {
        assert_eq!(encode(b"hello").unwrap(), "Cn8eVZg");
        assert_eq!(encode(&hex!("00")).unwrap(), "1");
        assert_eq!(encode(&hex!("000001")).unwrap(), "112");
        assert_eq!(encode(&[0u8; 50]).unwrap(), "1".repeat(50));
        assert_eq!(encode(b""), Err(Error::Empty));
    }

    #[test]
    fn encode_check_appends() {
        let payload = hex!("00759d6677091e973b9e9d99f19c68fbf43e3f05f9");
        assert_eq!(encode_check(&payload).unwrap(), "1BitcoinEaterAddressDontSendf59kuE");
        assert_eq!(encode_check(b"hello").unwrap(), "2L5B5yqsVG8Vt");
        assert_eq!(encode_check(&hex!("00")).unwrap(), "1Wh4bh");
        assert_eq!(encode_check(b""), Err(Error::Empty));
    }

    #[test]
    fn reserved_writes_in_place() {
        let mut buf = hex!("00759d6677091e973b9e9d99f19c68fbf43e3f05f900000000");
        assert_eq!(
            encode_check_reserved(&mut buf).unwrap(),
            "1BitcoinEaterAddressDontSendf59kuE"
        );
        assert_eq!(buf[21..], hex!("5eabd8a1"));
    }

    #[test]
    fn reserved_needs_payload_and_space() {
        assert_eq!(encode_check_reserved(&mut []), Err(Error::Empty));
        for len in 1..=CHECKSUM_LEN {
            let mut buf = vec![0u8; len];
            assert_eq!(
                encode_check_reserved(&mut buf),
                Err(Error::InsufficientReserved { len })
            );
            assert!(buf.iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn raw_flags() {
        let mut buf = hex!("00");
        assert_eq!(base58_from_bytes(&mut buf, 0).unwrap(), "1");
        assert_eq!(base58_from_bytes(&mut buf, 0x7), Err(Error::InvalidFlags(0x7)));
        assert_eq!(base58_from_bytes(&mut buf, 3), Err(Error::InvalidFlags(3)));

        let mut zeros = [0u8; 8];
        assert_eq!(base58_from_bytes(&mut zeros[..0], 0), Err(Error::Empty));
        assert_eq!(base58_from_bytes(&mut zeros[..0], 1), Err(Error::Empty));
        assert!(base58_from_bytes(&mut zeros[..4], 2).is_err());
    }

    #[test]
    fn raw_flags_agree_with_shared_slice_encoders() {
        let payload: &[u8] = &hex!("00759d6677091e973b9e9d99f19c68fbf43e3f05f9");
        let mut copy = payload.to_vec();
        assert_eq!(base58_from_bytes(&mut copy, 0), encode(payload));
        assert_eq!(base58_from_bytes(&mut copy, 1), encode_check(payload));
        assert_eq!(copy, payload);
    }

    #[test]
    fn flags_leave_buffer_alone_unless_reserved() {
        let original = hex!("0011931975b3f88847f32e0f74aaa4ef70448197c8");
        let mut buf = original;
        let appended = encode_with(&mut buf, Flags::Checksum).unwrap();
        assert_eq!(buf, original);
        assert_eq!(appended, "12bvhuo3ighaaP5rSCcRFDHSMbtQdyQwrz");
        assert_eq!(
            encode_with(&mut buf, Flags::None).unwrap(),
            encode(&original).unwrap()
        );
    }
}
