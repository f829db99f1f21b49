// SPDX-License-Identifier: MIT
//!
//! Extraction settings from babblefish.toml
//!

use crate::error::{Error, Result};
use crate::glossary::OnDuplicate;

/// Key column name used when nothing else is configured
pub const DEFAULT_KEY_COLUMN: &str = "stringID";
/// Value column name, ISO 639 code of the designated language
pub const DEFAULT_VALUE_COLUMN: &str = "EN";

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Config {
    pub key_column: String,
    pub value_column: String,
    pub on_duplicate: OnDuplicate,
    pub warn_on_duplicates: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            key_column: DEFAULT_KEY_COLUMN.to_string(),
            value_column: DEFAULT_VALUE_COLUMN.to_string(),
            on_duplicate: OnDuplicate::default(),
            warn_on_duplicates: false,
        }
    }
}

impl Config {
    /// Search default config file (babblefish.toml or ~/.babblefish.toml)
    ///
    /// Falls back to defaults when neither exists.
    pub fn new() -> Result<Self> {
        use std::path::PathBuf;
        let config_files = [
            PathBuf::new().join("babblefish.toml"),
            dirs::home_dir()
                .unwrap_or_default()
                .join(".babblefish.toml"),
        ];

        for config_file in config_files {
            match Self::with_config(&config_file) {
                Ok(conf) => {
                    log::debug!("Read config file {:?}", config_file);
                    return Ok(conf);
                }
                Err(Error::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                    log::debug!("Config file {:?} NOT found.", &config_file);
                }
                Err(err) => {
                    // Other err, stop searching
                    log::error!("{}", err);
                    return Err(err);
                }
            }
        }

        log::debug!("No config file, using defaults");
        Ok(Self::default())
    }

    /// Config from specific file
    pub fn with_config<P: AsRef<std::path::Path>>(config_path: P) -> Result<Self> {
        let path = config_path.as_ref();
        let config = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&config).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn partial_file() {
        let config = Config::from_toml(
            r#"
value_column = "FR"
on_duplicate = "reject"
"#,
        )
        .unwrap();
        assert_eq!(config.key_column, "stringID");
        assert_eq!(config.value_column, "FR");
        assert_eq!(config.on_duplicate, OnDuplicate::Reject);
        assert!(!config.warn_on_duplicates);
    }

    #[test]
    fn unknown_policy() {
        assert!(Config::from_toml("on_duplicate = \"first-wins\"").is_err());
    }

    #[test]
    fn read_config_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"key_column = \"id\"\nwarn_on_duplicates = true\n")
            .unwrap();

        let config = Config::with_config(file.path()).unwrap();
        assert_eq!(config.key_column, "id");
        assert_eq!(config.value_column, "EN");
        assert!(config.warn_on_duplicates);
    }

    #[test]
    fn malformed_config_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"key_column = [").unwrap();

        let err = Config::with_config(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::with_config(dir.path().join("babblefish.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
