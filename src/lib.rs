//! Base58 and Base58Check codec.
//! Bitcoin alphabet, leading zero bytes as '1's, optional double-SHA256 checksum.
//! Buffer-based entry points never write a byte unless the whole call succeeds.

pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

mod checksum;
mod convert;
mod decode;
mod encode;
mod error;
mod flags;

pub use checksum::{
    append_checksum, checksum, checksum_with, verify_and_strip, verify_and_strip_with,
    CHECKSUM_LEN,
};
pub use convert::{bytes_to_digits, digits_to_bytes};
pub use decode::{base58_to_bytes, decode, decode_check, decode_into, decoded_len};
pub use encode::{base58_from_bytes, encode, encode_check, encode_check_reserved, encode_with};
pub use error::{Error, Result};
pub use flags::Flags;
