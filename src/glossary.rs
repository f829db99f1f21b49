// SPDX-License-Identifier: MIT
//!
//! Glossary accumulated from spreadsheet rows
//!

use std::collections::BTreeMap;

/// What to do when a key is added a second time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnDuplicate {
    /// Later value replaces the stored one
    #[default]
    OverwriteAndLog,
    /// Stored value is kept, later one is dropped
    Reject,
}

impl OnDuplicate {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OverwriteAndLog => "overwrite-and-log",
            Self::Reject => "reject",
        }
    }
}

impl std::str::FromStr for OnDuplicate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "overwrite-and-log" | "overwrite" => Ok(Self::OverwriteAndLog),
            "reject" => Ok(Self::Reject),
            _ => Err(format!(
                "unknown duplicate policy {:?}, expected overwrite-and-log or reject",
                s
            )),
        }
    }
}

/// A key found more than once
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateKey {
    /// Normalized key
    pub key: String,
    /// Value being added
    pub new_value: String,
    /// Value already in the glossary
    pub old_value: String,
    /// How the collision was resolved
    pub resolution: OnDuplicate,
}

impl std::fmt::Display for DuplicateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.resolution {
            OnDuplicate::OverwriteAndLog => write!(
                f,
                "string id {} duplicated. Was: \"{}\" Now: \"{}\"",
                self.key, self.old_value, self.new_value
            ),
            OnDuplicate::Reject => write!(
                f,
                "string id {} duplicated. Kept: \"{}\" Ignored: \"{}\"",
                self.key, self.old_value, self.new_value
            ),
        }
    }
}

/// Lower-cased key to localized string, plus every duplicate seen on the way
#[derive(Clone, Debug)]
pub struct Glossary {
    name: String,
    entries: BTreeMap<String, String>,
    errors: Vec<DuplicateKey>,
    on_duplicate: OnDuplicate,
    warn_on_duplicates: bool,
}

impl Glossary {
    pub fn new(name: &str) -> Self {
        Self::with_policy(name, OnDuplicate::default())
    }

    pub fn with_policy(name: &str, on_duplicate: OnDuplicate) -> Self {
        Self {
            name: name.to_string(),
            entries: BTreeMap::new(),
            errors: vec![],
            on_duplicate,
            warn_on_duplicates: false,
        }
    }

    /// Emit a log warning for each duplicate as it is found
    pub fn warn_on_duplicates(mut self, warn: bool) -> Self {
        self.warn_on_duplicates = warn;
        self
    }

    /// Glossary name, usually the source file name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_entry(&mut self, key: &str, value: &str) {
        let key = key.to_lowercase();

        if let Some(old_value) = self.entries.get_mut(&key) {
            let dup = DuplicateKey {
                key,
                new_value: value.to_string(),
                old_value: old_value.clone(),
                resolution: self.on_duplicate,
            };
            if self.on_duplicate == OnDuplicate::OverwriteAndLog {
                *old_value = value.to_string();
            }
            if self.warn_on_duplicates {
                log::warn!("{}: {}", self.name, dup);
            }
            self.errors.push(dup);
        } else {
            self.entries.insert(key, value.to_string());
        }
    }

    pub fn add_pair<K: AsRef<str>, V: AsRef<str>>(&mut self, (key, value): (K, V)) {
        self.add_entry(key.as_ref(), value.as_ref());
    }

    /// Look up a key ignoring case
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(&key.to_lowercase()).map(|v| v.as_str())
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    pub fn errors(&self) -> &[DuplicateKey] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> Extend<(K, V)> for Glossary {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for pair in iter {
            self.add_pair(pair);
        }
    }
}
