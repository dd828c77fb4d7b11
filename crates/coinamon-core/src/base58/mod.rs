//! Base58 and Base58Check encoding and decoding.
//!
//! Implements Bitcoin's modified Base58 alphabet with explicit byte-array
//! long division, so no big-integer dependency is needed. Base58Check
//! appends a 4-byte double-SHA-256 checksum and is used for WIF private
//! keys and Bitcoin addresses.

use crate::hash::hash256;
use crate::CoreError;

/// Bitcoin's modified Base58 alphabet.
///
/// Excludes 0, O, I, l to reduce visual ambiguity. Index 0 maps to '1',
/// the character used to preserve leading zero bytes.
const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Reverse lookup from ASCII byte to Base58 digit value.
///
/// Entries not in the alphabet hold 255.
const DIGIT_VALUE: [u8; 128] = {
    let mut table = [255u8; 128];
    let mut i = 0usize;
    while i < 58 {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Encode a byte slice to a Base58 string.
///
/// The input is treated as a big-endian unsigned integer and repeatedly
/// divided by 58; each leading zero byte becomes a leading '1' character.
/// Empty input encodes to the empty string.
///
/// # Arguments
/// * `data` - The bytes to encode.
///
/// # Returns
/// A Base58-encoded string.
pub fn encode(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|&&b| b == 0).count();

    // Base-256 big-endian digits of the value past the zero prefix.
    let mut dividend = data[zeros..].to_vec();

    // Base-58 digits, least significant first.
    let mut digits: Vec<u8> = Vec::with_capacity(dividend.len() * 137 / 100 + 1);
    while !dividend.is_empty() {
        let mut remainder = 0u32;
        let mut quotient = Vec::with_capacity(dividend.len());
        for &byte in &dividend {
            let acc = (remainder << 8) | u32::from(byte);
            let q = (acc / 58) as u8;
            remainder = acc % 58;
            if !(quotient.is_empty() && q == 0) {
                quotient.push(q);
            }
        }
        digits.push(ALPHABET[remainder as usize]);
        dividend = quotient;
    }

    let mut result = String::with_capacity(zeros + digits.len());
    for _ in 0..zeros {
        result.push(ALPHABET[0] as char);
    }
    result.extend(digits.iter().rev().map(|&b| b as char));
    result
}

/// Decode a Base58 string to a byte vector.
///
/// Leading '1' characters decode to leading zero bytes; the empty string
/// decodes to an empty vector.
///
/// # Arguments
/// * `s` - The Base58 string to decode.
///
/// # Returns
/// `Ok(Vec<u8>)` on success, or `CoreError::InvalidCharacter` naming the
/// first character outside the Base58 alphabet.
pub fn decode(s: &str) -> Result<Vec<u8>, CoreError> {
    // Base-256 digits of the accumulated value, least significant first.
    let mut output: Vec<u8> = Vec::with_capacity(s.len() * 733 / 1000 + 1);
    for ch in s.chars() {
        let digit = match u32::from(ch) {
            c if c < 128 => DIGIT_VALUE[c as usize],
            _ => 255,
        };
        if digit == 255 {
            return Err(CoreError::InvalidCharacter(ch));
        }

        // output = output * 58 + digit
        let mut carry = u32::from(digit);
        for byte in output.iter_mut() {
            let acc = u32::from(*byte) * 58 + carry;
            *byte = (acc & 0xff) as u8;
            carry = acc >> 8;
        }
        while carry > 0 {
            output.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }
    output.reverse();

    let zeros = s.bytes().take_while(|&b| b == ALPHABET[0]).count();
    let mut result = vec![0u8; zeros];
    result.extend_from_slice(&output);
    Ok(result)
}

/// Encode a byte slice with a 4-byte double-SHA-256 checksum appended
/// (Base58Check).
///
/// The checksum is the first 4 bytes of `hash256(data)`; the result is
/// `encode(data || checksum)`.
///
/// # Arguments
/// * `data` - The bytes to encode (typically version byte + payload).
///
/// # Returns
/// A Base58Check-encoded string.
pub fn check_encode(data: &[u8]) -> String {
    let checksum = hash256(data);
    let mut payload = data.to_vec();
    payload.extend_from_slice(&checksum[..4]);
    encode(&payload)
}

/// Decode a Base58Check string, verifying and stripping the 4-byte checksum.
///
/// # Arguments
/// * `s` - The Base58Check string to decode.
///
/// # Returns
/// `Ok(Vec<u8>)` of the payload (without checksum) on success, or:
/// - `CoreError::InvalidCharacter` for characters outside the alphabet;
/// - `CoreError::MalformedInput` if fewer than 4 bytes decode (no room
///   for a checksum);
/// - `CoreError::ChecksumMismatch` if the embedded checksum disagrees
///   with `hash256(payload)[..4]`.
pub fn check_decode(s: &str) -> Result<Vec<u8>, CoreError> {
    let decoded = decode(s)?;
    if decoded.len() < 4 {
        return Err(CoreError::MalformedInput(
            "decoded data too short to hold a checksum".to_string(),
        ));
    }
    let (payload, checksum) = decoded.split_at(decoded.len() - 4);
    let expected = hash256(payload);
    if checksum != &expected[..4] {
        return Err(CoreError::ChecksumMismatch);
    }
    Ok(payload.to_vec())
}
