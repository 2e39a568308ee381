use crate::table::encode_nibble;

/// Offset between an ASCII lowercase letter and its uppercase form
const CASE_OFFSET: u8 = 32;

/// Number of output symbols for `len` input bytes, `None` if it would overflow.
pub fn encoded_len(len: usize) -> Option<usize> {
    len.checked_mul(2)
}

/// Encode bytes as hex symbols, high nibble first.
///
/// Output is always exactly twice the input length. Letters are `a`-`f`
/// unless `uppercase` is set, in which case they are `A`-`F`. Digits are
/// the same in both cases.
pub fn encode(data: &[u8], uppercase: bool) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len() * 2);

    for &byte in data {
        let hi = encode_nibble(byte >> 4);
        let lo = encode_nibble(byte & 0x0F);

        if uppercase {
            result.push(to_uppercase(hi));
            result.push(to_uppercase(lo));
        } else {
            result.push(hi);
            result.push(lo);
        }
    }

    result
}

/// Encode with lowercase letters.
pub fn encode_lower(data: &[u8]) -> Vec<u8> {
    encode(data, false)
}

/// Encode with uppercase letters.
pub fn encode_upper(data: &[u8]) -> Vec<u8> {
    encode(data, true)
}

/// Encode straight into a `String`.
pub fn encode_to_string(data: &[u8], uppercase: bool) -> String {
    // Every symbol comes from the table, so the buffer is ASCII.
    encode(data, uppercase).into_iter().map(char::from).collect()
}

#[inline]
fn to_uppercase(symbol: u8) -> u8 {
    if symbol.is_ascii_lowercase() {
        symbol - CASE_OFFSET
    } else {
        symbol
    }
}
