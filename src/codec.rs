//! A codec bound to one encode/decode policy.

use std::path::Path;

use crate::config::Base16Config;
use crate::errors::{ConfigError, DecodeError};
use crate::{decoder, encoder};

/// Encoder/decoder pair carrying a [`Base16Config`].
///
/// # Example
/// ```
/// use base16::{Base16Config, Codec};
///
/// let mut config = Base16Config::default();
/// config.encode.uppercase = true;
/// config.decode.ignore_invalid = false;
///
/// let codec = Codec::new(config);
/// assert_eq!(codec.encode(b"Hi"), b"4869");
/// assert_eq!(codec.encode(&[0xBE, 0xEF]), b"BEEF");
/// assert!(codec.decode(b"zz").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codec {
    config: Base16Config,
}

impl Codec {
    pub fn new(config: Base16Config) -> Self {
        Codec { config }
    }

    /// Build a codec from a TOML file; see [`Base16Config::load_from_file`].
    pub fn from_config_file(path: &Path) -> Result<Self, ConfigError> {
        Ok(Codec::new(Base16Config::load_from_file(path)?))
    }

    pub fn config(&self) -> &Base16Config {
        &self.config
    }

    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        encoder::encode(data, self.config.encode.uppercase)
    }

    pub fn encode_to_string(&self, data: &[u8]) -> String {
        encoder::encode_to_string(data, self.config.encode.uppercase)
    }

    pub fn decode(&self, data: &[u8]) -> Result<Vec<u8>, DecodeError> {
        decoder::decode(data, self.config.decode.ignore_invalid)
    }
}

impl From<Base16Config> for Codec {
    fn from(config: Base16Config) -> Self {
        Codec::new(config)
    }
}
