use crate::errors::DecodeError;
use crate::table::{INVALID, decode_symbol};

/// Number of bytes produced by `len` symbols.
pub fn decoded_len(len: usize) -> Result<usize, DecodeError> {
    if len % 2 != 0 {
        return Err(DecodeError::odd_length(len));
    }
    Ok(len / 2)
}

/// Decode hex symbols (either case) back into bytes.
///
/// Input with an odd number of symbols always fails with
/// [`DecodeError::OddLength`], whatever the policy.
///
/// With `ignore_invalid` set, a symbol outside the alphabet decodes to the
/// sentinel `0xFF` and is combined like any nibble (`"zz"` gives `0xFF`,
/// `"z0"` gives `0xF0`). The result is then not round-trip safe, but no
/// bytes are dropped. With `ignore_invalid` cleared, the first such symbol
/// aborts the call with [`DecodeError::InvalidByte`] and nothing is returned.
pub fn decode(data: &[u8], ignore_invalid: bool) -> Result<Vec<u8>, DecodeError> {
    let mut result = Vec::with_capacity(decoded_len(data.len())?);

    for (pair_index, pair) in data.chunks_exact(2).enumerate() {
        let position = pair_index * 2;
        let hi = nibble_at(pair[0], position, ignore_invalid)?;
        let lo = nibble_at(pair[1], position + 1, ignore_invalid)?;

        // u8 arithmetic: the sentinel's high bits shift out
        result.push((hi << 4) | lo);
    }

    Ok(result)
}

/// Decode a string slice; see [`decode`].
pub fn decode_str(data: &str, ignore_invalid: bool) -> Result<Vec<u8>, DecodeError> {
    decode(data.as_bytes(), ignore_invalid)
}

#[inline]
fn nibble_at(symbol: u8, position: usize, ignore_invalid: bool) -> Result<u8, DecodeError> {
    let nibble = decode_symbol(symbol);
    if nibble == INVALID {
        if !ignore_invalid {
            tracing::debug!(symbol, position, "rejecting invalid hex symbol");
            return Err(DecodeError::invalid_byte(symbol, position));
        }
        tracing::trace!(symbol, position, "substituting sentinel for invalid hex symbol");
    }
    Ok(nibble)
}
