//! Multi-valued tag map
//!
//! Audio tags are inherently multi-valued (several artists, several genres),
//! so every tag name maps to an ordered list of values, never a scalar.
//! Keys are kept sorted so serialized output is deterministic; the order of
//! values under one key is the order in which they were produced or merged.

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

/// Ordered values of a single tag
pub type TagValue = Vec<String>;

/// Mapping from lowercase tag name to its ordered values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagMap {
    entries: BTreeMap<String, TagValue>,
}

impl TagMap {
    /// Create an empty tag map
    pub fn new() -> Self {
        Self::default()
    }

    /// Values stored under `name`
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// First value stored under `name`
    pub fn first(&self, name: &str) -> Option<&str> {
        self.entries
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Replace all values of `name`, returning the previous ones
    pub fn insert(&mut self, name: impl Into<String>, values: TagValue) -> Option<TagValue> {
        self.entries.insert(name.into(), values)
    }

    /// Append one value to `name`, creating the entry if needed
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(name.into()).or_default().push(value.into());
    }

    /// Append several values to `name` after any existing ones
    ///
    /// The entry is created even when `values` is empty.
    pub fn append<I>(&mut self, name: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.entries.entry(name.into()).or_default().extend(values);
    }

    pub fn remove(&mut self, name: &str) -> Option<TagValue> {
        self.entries.remove(name)
    }

    /// Number of distinct tag names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate tag names and their values in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<(String, TagValue)> for TagMap {
    /// Repeated names are merged in iteration order rather than overwritten
    fn from_iter<I: IntoIterator<Item = (String, TagValue)>>(iter: I) -> Self {
        let mut map = TagMap::new();
        for (name, values) in iter {
            map.append(name, values);
        }
        map
    }
}

impl<'a> FromIterator<(&'a str, &'a [&'a str])> for TagMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a [&'a str])>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(name, values)| {
                (
                    name.to_string(),
                    values.iter().map(|v| v.to_string()).collect(),
                )
            })
            .collect()
    }
}

impl IntoIterator for TagMap {
    type Item = (String, TagValue);
    type IntoIter = btree_map::IntoIter<String, TagValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
