//! Base-256 <-> base-58 conversion over arbitrary-width integers.
//! The working value lives in u64 limbs (LE, low limb first); each limb step
//! goes through a u128 temp so no intermediate ever overflows.
//! Leading zero bytes and leading zero digits map one-to-one and never enter
//! the big number.
use crate::error::{Error, Result};
use crate::ALPHABET;
use zeroize::Zeroizing;

const BASE: u64 = 58;
const INVALID: u8 = 255;

/// Char -> digit value; `INVALID` for everything outside the alphabet,
/// including every byte with the high bit set.
const DIGIT_TO_VAL: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0usize;
    while i < ALPHABET.len() {
        #[allow(clippy::cast_possible_truncation)]
        {
            table[ALPHABET[i] as usize] = i as u8;
        }
        i += 1;
    }
    table
};

/// Digit value of an alphabet character.
#[inline]
pub(crate) fn digit_value(ch: u8) -> Option<u8> {
    match DIGIT_TO_VAL[ch as usize] {
        INVALID => None,
        val => Some(val),
    }
}

/// Converts big-endian bytes to base-58 digit values (0..=57), MSB first.
///
/// Each leading zero byte becomes one leading zero digit; an empty input
/// gives an empty digit sequence.
#[must_use]
pub fn bytes_to_digits(input: &[u8]) -> Vec<u8> {
    let zeros = input.iter().take_while(|&&b| b == 0).count();
    let non_zero = &input[zeros..];
    // Pack to u64 LE limbs; rchunks walks from the least significant end.
    let mut num: Zeroizing<Vec<u64>> = Zeroizing::new(
        non_zero
            .rchunks(8)
            .map(|chunk| chunk.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b)))
            .collect(),
    );
    // log58(256) ~= 1.366
    let mut digits = Vec::with_capacity(zeros + non_zero.len() * 138 / 100 + 1);
    while !num.is_empty() {
        let mut remainder = 0u64;
        for limb in num.iter_mut().rev() {
            let temp = (u128::from(remainder) << 64) | u128::from(*limb);
            #[allow(clippy::cast_possible_truncation)]
            {
                *limb = (temp / u128::from(BASE)) as u64;
                remainder = (temp % u128::from(BASE)) as u64;
            }
        }
        #[allow(clippy::cast_possible_truncation)]
        digits.push(remainder as u8);
        while num.last() == Some(&0) {
            num.pop();
        }
    }
    digits.extend(std::iter::repeat_n(0u8, zeros));
    digits.reverse();
    tracing::trace!(bytes = input.len(), digits = digits.len(), "converted to base58 digits");
    digits
}

/// Converts base-58 digit values (MSB first) back to minimal big-endian bytes.
///
/// Each leading zero digit becomes one leading zero byte.
///
/// # Errors
/// - `InvalidChar { index, byte }`: digit value at `index` is 58 or above.
pub fn digits_to_bytes(digits: &[u8]) -> Result<Vec<u8>> {
    if let Some((index, &byte)) = digits
        .iter()
        .enumerate()
        .find(|&(_, &d)| u64::from(d) >= BASE)
    {
        tracing::debug!(index, byte, "base58 digit value out of range");
        return Err(Error::InvalidChar { index, byte });
    }
    let zeros = digits.iter().take_while(|&&d| d == 0).count();
    // Horner over limbs: num = num * 58 + digit
    let mut num: Zeroizing<Vec<u64>> = Zeroizing::new(Vec::with_capacity(digits.len() / 10 + 1));
    for &digit in &digits[zeros..] {
        let mut carry = u128::from(digit);
        for limb in num.iter_mut() {
            let temp = u128::from(*limb) * u128::from(BASE) + carry;
            #[allow(clippy::cast_possible_truncation)]
            {
                *limb = temp as u64;
            }
            carry = temp >> 64;
        }
        if carry != 0 {
            #[allow(clippy::cast_possible_truncation)]
            num.push(carry as u64);
        }
    }
    let mut output = Vec::with_capacity(zeros + num.len() * 8);
    output.extend(std::iter::repeat_n(0u8, zeros));
    output.extend(
        num.iter()
            .rev()
            .flat_map(|limb| limb.to_be_bytes())
            .skip_while(|&b| b == 0),
    );
    tracing::trace!(digits = digits.len(), bytes = output.len(), "converted from base58 digits");
    Ok(output)
}
