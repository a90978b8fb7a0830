/*!
 * Chinese → Vietnamese dictionary store.
 *
 * The dictionary is a flat JSON object mapping short source tokens to their
 * translations. It is loaded once per run and then only borrowed.
 */

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, error};

use crate::errors::DictionaryError;

/// Immutable token → translation mapping
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, String>,
    // Longest key, counted in chars
    max_key_len: usize,
}

impl Dictionary {
    /// Build a dictionary from an iterator of pairs. Empty keys are dropped.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries: HashMap<String, String> = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| !k.is_empty())
            .collect();
        let max_key_len = entries.keys().map(|k| k.chars().count()).max().unwrap_or(0);

        Self { entries, max_key_len }
    }

    /// Parse a dictionary from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let map: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self::from_entries(map))
    }

    /// Load a dictionary from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DictionaryError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let dictionary = Self::from_json_str(&text).map_err(|source| DictionaryError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        debug!(
            "Loaded {} dictionary entries from {:?} (longest key: {} chars)",
            dictionary.len(),
            path,
            dictionary.max_key_len()
        );
        Ok(dictionary)
    }

    /// Load a dictionary, falling back to an empty one when the file is unusable.
    ///
    /// With an empty dictionary every character is glossed as unknown, so the
    /// run still produces a document.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(dictionary) => dictionary,
            Err(e) => {
                error!("Cannot read the dictionary file: {}", e);
                Self::default()
            }
        }
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length in characters of the longest key
    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    /// Number of keys longer than `window` characters
    pub fn count_longer_than(&self, window: usize) -> usize {
        self.entries
            .keys()
            .filter(|k| k.chars().count() > window)
            .count()
    }
}
