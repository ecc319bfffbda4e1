//! Measurements mapping
//!
//! Ordered string-keyed mapping produced by decode and consumed by encode.
//! Keys keep the order in which they first appeared in the frame; writing an
//! existing key replaces its value in place.

use indexmap::map::{IntoIter, Iter};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Device variables supplied by the network server (currently unused)
pub type Variables = std::collections::HashMap<String, String>;

/// Named measurement values in frame order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Measurements {
    entries: IndexMap<String, Value>,
}

impl Measurements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite, returning the previous value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// The only entry, if there is exactly one
    pub fn single(&self) -> Option<(&str, &Value)> {
        match self.entries.len() {
            1 => self.entries.first().map(|(k, v)| (k.as_str(), v)),
            _ => None,
        }
    }
}

impl<'a> IntoIterator for &'a Measurements {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Measurements {
    type Item = (String, Value);
    type IntoIter = IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Measurements {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut measurements = Measurements::new();
        for (name, value) in iter {
            measurements.insert(name, value);
        }
        measurements
    }
}
