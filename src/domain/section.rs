//! Ordered key/value table of a single section.

use crate::domain::value::IniValue;
use indexmap::IndexMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionTable {
    entries: IndexMap<String, IniValue>,
}

impl SectionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value. A key that is already present keeps its position and
    /// takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: IniValue) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&IniValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
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

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IniValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, IniValue)> for SectionTable {
    fn from_iter<I: IntoIterator<Item = (String, IniValue)>>(iter: I) -> Self {
        let mut table = SectionTable::new();
        table.extend(iter);
        table
    }
}

impl Extend<(String, IniValue)> for SectionTable {
    fn extend<I: IntoIterator<Item = (String, IniValue)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for SectionTable {
    type Item = (String, IniValue);
    type IntoIter = indexmap::map::IntoIter<String, IniValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a SectionTable {
    type Item = (&'a String, &'a IniValue);
    type IntoIter = indexmap::map::Iter<'a, String, IniValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
