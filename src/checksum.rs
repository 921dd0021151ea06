//! Base58Check checksum: first 4 bytes of `H(H(payload))`.
//! `H` is any `sha2::Digest`; the plain functions use SHA-256 as Bitcoin does.
use crate::error::{Error, Result};
use sha2::{Digest, Sha256};

/// Bytes of double-hash kept as the checksum.
pub const CHECKSUM_LEN: usize = 4;

/// Double-SHA256 checksum of `payload`.
#[must_use]
#[inline]
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    checksum_with::<Sha256>(payload)
}

/// Checksum of `payload` using `D` as the hash primitive.
///
/// `D` must produce at least `CHECKSUM_LEN` bytes of output.
#[must_use]
pub fn checksum_with<D: Digest>(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash1 = D::digest(payload);
    let hash2 = D::digest(hash1);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&hash2[..CHECKSUM_LEN]);
    out
}

/// `payload || checksum(payload)` in a fresh buffer.
#[must_use]
pub fn append_checksum(payload: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum(payload));
    data
}

/// Splits off and checks the trailing double-SHA256 checksum, returning the payload.
///
/// # Errors
/// - `TooShort(len)`: fewer than `CHECKSUM_LEN` bytes, so no checksum can be present.
/// - `ChecksumMismatch`: trailing bytes differ from the recomputed checksum.
#[inline]
pub fn verify_and_strip(data: &[u8]) -> Result<&[u8]> {
    verify_and_strip_with::<Sha256>(data)
}

/// [`verify_and_strip`] with `D` as the hash primitive.
///
/// # Errors
/// Same as [`verify_and_strip`].
pub fn verify_and_strip_with<D: Digest>(data: &[u8]) -> Result<&[u8]> {
    if data.len() < CHECKSUM_LEN {
        return Err(Error::TooShort(data.len()));
    }
    let (payload, candidate) = data.split_at(data.len() - CHECKSUM_LEN);
    let expected = checksum_with::<D>(payload);
    if expected != candidate {
        let mut actual = [0u8; CHECKSUM_LEN];
        actual.copy_from_slice(candidate);
        tracing::debug!(
            payload_len = payload.len(),
            ?expected,
            ?actual,
            "base58check checksum mismatch"
        );
        return Err(Error::ChecksumMismatch { expected, actual });
    }
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use sha2::Sha512;

    #[test]
    fn known_checksums() {
        assert_eq!(checksum(b""), hex!("5df6e0e2"));
        assert_eq!(checksum(b"hello"), hex!("9595c9df"));
        assert_eq!(
            checksum(&hex!("00759d6677091e973b9e9d99f19c68fbf43e3f05f9")),
            hex!("5eabd8a1")
        );
    }

    #[test]
    fn append_then_verify() {
        let payload = hex!("0011931975b3f88847f32e0f74aaa4ef70448197c8");
        let data = append_checksum(&payload);
        assert_eq!(data, hex!("0011931975b3f88847f32e0f74aaa4ef70448197c8537285c3"));
        assert_eq!(verify_and_strip(&data), Ok(&payload[..]));
    }

    #[test]
    fn tampered_or_short() {
        let mut data = append_checksum(b"hello");
        data[0] ^= 0x01;
        assert!(matches!(
            verify_and_strip(&data),
            Err(Error::ChecksumMismatch { actual, .. }) if actual == hex!("9595c9df")
        ));
        assert_eq!(verify_and_strip(&[1, 2, 3]), Err(Error::TooShort(3)));
        assert_eq!(verify_and_strip(&[]), Err(Error::TooShort(0)));
        assert_eq!(verify_and_strip(&hex!("5df6e0e2")), Ok(&[][..]));
    }

    #[test]
    fn pluggable_digest() {
        let payload = b"base58check";
        let sum = checksum_with::<Sha512>(payload);
        assert_ne!(sum, checksum(payload));
        let mut data = payload.to_vec();
        data.extend_from_slice(&sum);
        assert_eq!(verify_and_strip_with::<Sha512>(&data), Ok(&payload[..]));
        assert!(verify_and_strip(&data).is_err());
    }
}
