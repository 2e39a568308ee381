//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use base16::prelude::*;
//!
//! let codec = Codec::default();
//! let encoded = codec.encode(b"Hello");
//! assert_eq!(decode(&encoded, false).unwrap(), b"Hello");
//! ```

pub use crate::{
    // Configuration
    Base16Config,
    Codec,

    // Errors
    ConfigError,
    DecodeError,

    // Core encoding/decoding
    decode,
    decode_str,
    encode,
    encode_to_string,
};
