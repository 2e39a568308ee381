use std::fmt;

/// Errors that can occur during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The input has an odd number of symbols and cannot be paired into bytes
    OddLength { length: usize },
    /// A symbol outside the hex alphabet, reported only in strict mode
    InvalidByte { byte: u8, position: usize },
}

impl DecodeError {
    /// Create an OddLength error for an input of `length` symbols
    pub fn odd_length(length: usize) -> Self {
        DecodeError::OddLength { length }
    }

    /// Create an InvalidByte error for `byte` found at `position`
    pub fn invalid_byte(byte: u8, position: usize) -> Self {
        DecodeError::InvalidByte { byte, position }
    }

    /// The offending symbol, if the error is about one.
    pub fn symbol(&self) -> Option<u8> {
        match self {
            DecodeError::InvalidByte { byte, .. } => Some(*byte),
            DecodeError::OddLength { .. } => None,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::OddLength { length } => {
                writeln!(f, "error: invalid length for decode")?;
                writeln!(f)?;
                writeln!(
                    f,
                    "  input is {} symbols, expected an even number",
                    length
                )?;
                writeln!(f)?;
                write!(f, "hint: every byte is written as exactly two hex digits")
            }
            DecodeError::InvalidByte { byte, position } => {
                if byte.is_ascii_graphic() || *byte == b' ' {
                    writeln!(
                        f,
                        "error: invalid symbol '{}' at position {}",
                        *byte as char, position
                    )?;
                } else {
                    writeln!(
                        f,
                        "error: invalid symbol {:#04x} at position {}",
                        byte, position
                    )?;
                }
                writeln!(f)?;
                write!(f, "hint: valid symbols: 0123456789abcdefABCDEF")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Error raised while loading a configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read
    Io(std::io::Error),
    /// The contents are not valid TOML for this configuration
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "error: failed to read configuration: {}", e),
            ConfigError::Parse(e) => write!(f, "error: failed to parse configuration: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}
