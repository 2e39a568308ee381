//! Fixed lookup tables for the nibble <-> symbol mapping.
//!
//! Both tables are `const` and built at compile time, so they are shared
//! read-only by every caller on every thread.

/// Sentinel returned by [`decode_symbol`] for bytes outside the hex alphabet.
///
/// Sits outside the nibble range `0..=15`. Tolerant decoding combines it with
/// shift/OR like any other nibble, so the value must stay `0xFF`.
pub const INVALID: u8 = 0xFF;

/// Nibble to lowercase ASCII hex digit.
pub const ENCODE_TABLE: [u8; 16] = *b"0123456789abcdef";

/// ASCII byte to nibble, or [`INVALID`].
///
/// Covers `0-9`, `a-f` and `A-F` (22 symbols).
pub const DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];

    let mut i = 0;
    while i < 16 {
        let symbol = ENCODE_TABLE[i];
        table[symbol as usize] = i as u8;
        // Uppercase twin for a-f
        if symbol >= b'a' {
            table[(symbol - 32) as usize] = i as u8;
        }
        i += 1;
    }

    table
}

/// Encode a nibble as its lowercase hex symbol. Bits above the low four are ignored.
#[inline]
pub const fn encode_nibble(nibble: u8) -> u8 {
    ENCODE_TABLE[(nibble & 0x0F) as usize]
}

/// Decode a hex symbol (either case) into its nibble value.
///
/// Returns [`INVALID`] for anything outside the alphabet.
#[inline]
pub const fn decode_symbol(symbol: u8) -> u8 {
    DECODE_TABLE[symbol as usize]
}

/// Check whether `symbol` belongs to the hex alphabet.
#[inline]
pub const fn is_hex_symbol(symbol: u8) -> bool {
    decode_symbol(symbol) != INVALID
}
