//! Base16 (hexadecimal) encoding and decoding.
//!
//! Every byte becomes two symbols from `0-9a-f`, high nibble first. Decoding
//! accepts either case and lets the caller choose what happens to symbols
//! outside the alphabet.
//!
//! # Example
//! ```
//! let encoded = base16::encode(b"Hello, World!", true);
//! assert_eq!(encoded, b"48656C6C6F2C20576F726C6421");
//!
//! let decoded = base16::decode(&encoded, false).unwrap();
//! assert_eq!(decoded, b"Hello, World!");
//! ```

mod codec;
mod config;
mod decoder;
mod encoder;
mod errors;
pub mod prelude;
pub mod table;

pub use codec::Codec;
pub use config::{Base16Config, DecodeConfig, EncodeConfig};
pub use decoder::{decode, decode_str, decoded_len};
pub use encoder::{encode, encode_lower, encode_to_string, encode_upper, encoded_len};
pub use errors::{ConfigError, DecodeError};

#[cfg(test)]
mod tests;
