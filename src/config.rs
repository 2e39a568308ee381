use serde::Deserialize;
use std::path::Path;

use crate::errors::ConfigError;

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "snake_case")]
pub struct EncodeConfig {
    /// Emit `A`-`F` instead of `a`-`f`
    pub uppercase: bool,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "snake_case")]
pub struct DecodeConfig {
    /// Substitute the sentinel for invalid symbols instead of failing
    pub ignore_invalid: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        DecodeConfig {
            ignore_invalid: true,
        }
    }
}

/// Encode and decode policy, loadable from TOML:
///
/// ```toml
/// [encode]
/// uppercase = false
///
/// [decode]
/// ignore_invalid = true
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "snake_case")]
pub struct Base16Config {
    pub encode: EncodeConfig,
    pub decode: DecodeConfig,
}

/// One configuration file; only the keys it sets take effect when merged.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "snake_case")]
struct ConfigLayer {
    encode: EncodeLayer,
    decode: DecodeLayer,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "snake_case")]
struct EncodeLayer {
    uppercase: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "snake_case")]
struct DecodeLayer {
    ignore_invalid: Option<bool>,
}

impl Base16Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load the bundled `base16.toml`
    pub fn load_default() -> Result<Self, ConfigError> {
        let content = include_str!("../base16.toml");
        Self::from_toml(content)
    }

    /// Load configuration from custom file path
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration with user overrides from standard locations
    /// 1. Start with the bundled defaults
    /// 2. Override with ~/.config/base16/base16.toml if it exists
    /// 3. Override with ./base16.toml if it exists in current directory
    pub fn load_with_overrides() -> Result<Self, ConfigError> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("base16").join("base16.toml");
            config.apply_file(&user_config_path);
        }

        config.apply_file(Path::new("base16.toml"));

        Ok(config)
    }

    /// Apply one TOML layer; keys it leaves out keep their current value.
    pub fn merge_toml(&mut self, content: &str) -> Result<(), ConfigError> {
        let layer: ConfigLayer = toml::from_str(content)?;

        if let Some(uppercase) = layer.encode.uppercase {
            self.encode.uppercase = uppercase;
        }
        if let Some(ignore_invalid) = layer.decode.ignore_invalid {
            self.decode.ignore_invalid = ignore_invalid;
        }

        Ok(())
    }

    fn apply_file(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }

        let result = std::fs::read_to_string(path)
            .map_err(ConfigError::from)
            .and_then(|content| self.merge_toml(&content));

        match result {
            Ok(()) => tracing::debug!(path = %path.display(), "applied base16 config override"),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping base16 config override"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = Base16Config::load_default().unwrap();
        assert_eq!(config, Base16Config::default());
        assert!(!config.encode.uppercase);
        assert!(config.decode.ignore_invalid);
    }

    #[test]
    fn test_load_from_toml_string() {
        let toml_content = r#"
[encode]
uppercase = true

[decode]
ignore_invalid = false
"#;
        let config = Base16Config::from_toml(toml_content).unwrap();
        assert!(config.encode.uppercase);
        assert!(!config.decode.ignore_invalid);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = Base16Config::from_toml("[encode]\nuppercase = true\n").unwrap();
        assert!(config.encode.uppercase);
        assert!(config.decode.ignore_invalid);

        let empty = Base16Config::from_toml("").unwrap();
        assert_eq!(empty, Base16Config::default());
    }

    #[test]
    fn test_merge_only_overrides_set_keys() {
        let mut config = Base16Config::from_toml("[encode]\nuppercase = true\n").unwrap();
        config.merge_toml("[decode]\nignore_invalid = false\n").unwrap();

        assert!(config.encode.uppercase);
        assert!(!config.decode.ignore_invalid);
    }

    #[test]
    fn test_merge_rejects_bad_toml() {
        let mut config = Base16Config::default();
        let err = config.merge_toml("[encode]\nuppercase = \"yes\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert_eq!(config, Base16Config::default());
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Base16Config::load_from_file(Path::new("/nonexistent/base16.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
