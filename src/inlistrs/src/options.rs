// inlistrs/src/options.rs

//! Option mappings read out of a namelist.

use crate::value::InlistValue;
use serde::Serialize;
use std::collections::btree_map::{self, BTreeMap};

/// Mapping from lowercase option name to its normalized value.
///
/// Keys are kept sorted so that anything derived from a mapping (diffs,
/// reports) comes out in a stable order. Inserting an existing key replaces
/// its value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OptionMap(BTreeMap<String, InlistValue>);

impl OptionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&InlistValue> {
        self.0.get(key)
    }

    /// Get a value as a string with surrounding quotes removed.
    ///
    /// Non-text values are rendered with their display form.
    pub fn get_unquoted(&self, key: &str) -> Option<String> {
        self.get(key).map(|value| match value {
            InlistValue::Text(text) => unquote(text).to_string(),
            other => other.to_string(),
        })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<InlistValue>
    where
        K: Into<String>,
        V: Into<InlistValue>,
    {
        self.0.insert(key.into(), value.into())
    }

    /// Merge another mapping on top of this one; its values win on collisions.
    pub fn merge(&mut self, other: OptionMap) {
        self.0.extend(other.0);
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, InlistValue)> for OptionMap {
    fn from_iter<I: IntoIterator<Item = (String, InlistValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a OptionMap {
    type Item = (&'a String, &'a InlistValue);
    type IntoIter = btree_map::Iter<'a, String, InlistValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Strip surrounding single quotes, then surrounding double quotes.
///
/// ```
/// assert_eq!(inlistrs::unquote("'inlist_project'"), "inlist_project");
/// assert_eq!(inlistrs::unquote("\"inlist1\""), "inlist1");
/// ```
pub fn unquote(text: &str) -> &str {
    text.trim_matches('\'').trim_matches('"')
}
