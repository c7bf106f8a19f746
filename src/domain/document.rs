//! Parsed two-level configuration document.

use crate::domain::section::SectionTable;
use crate::domain::value::IniValue;
use crate::ports::config_port::ConfigPort;
use indexmap::IndexMap;

/// Section name → [`SectionTable`], in file order.
///
/// Built once from a source and never mutated afterwards; there is no public
/// way to add or remove sections from an existing document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument {
    sections: IndexMap<String, SectionTable>,
}

impl ConfigDocument {
    pub fn section(&self, name: &str) -> Option<&SectionTable> {
        self.sections.get(name)
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Repeated section names merge into the first occurrence; later keys win.
impl FromIterator<(String, SectionTable)> for ConfigDocument {
    fn from_iter<I: IntoIterator<Item = (String, SectionTable)>>(iter: I) -> Self {
        let mut sections: IndexMap<String, SectionTable> = IndexMap::new();
        for (name, table) in iter {
            sections.entry(name).or_default().extend(table);
        }
        Self { sections }
    }
}

impl ConfigPort for ConfigDocument {
    fn value(&self, section: &str, key: &str) -> Option<&IniValue> {
        self.sections.get(section).and_then(|t| t.get(key))
    }
}
