//! Section-scoped query façade over a [`ConfigDocument`].
//!
//! ```no_run
//! # fn main() -> Result<(), configreader::ConfigError> {
//! let mut ini = configreader::load("config.ini", Some("production"))?;
//! println!("{:?}", ini.get("host")?);
//!
//! ini.select_section("debug");
//! for (key, value) in ini.iter()? {
//!     println!("{key} = {value}");
//! }
//! # Ok(())
//! # }
//! ```

use crate::domain::document::ConfigDocument;
use crate::domain::error::ConfigError;
use crate::domain::section::SectionTable;
use crate::domain::value::IniValue;
use crate::ports::config_port::ConfigPort;
use crate::ports::source_port::DocumentSource;

#[derive(Debug, Clone)]
pub struct ConfigAccessor {
    document: ConfigDocument,
    selected_section: Option<String>,
}

impl ConfigAccessor {
    pub fn new(document: ConfigDocument, initial_section: Option<&str>) -> Self {
        Self {
            document,
            selected_section: initial_section.map(str::to_string),
        }
    }

    pub fn from_source(
        source: &dyn DocumentSource,
        initial_section: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let document = source.load_document()?;
        log::debug!(
            "loaded {} section(s) from {}",
            document.len(),
            source.describe()
        );
        Ok(Self::new(document, initial_section))
    }

    /// Switch the selected section. The name is not checked against the
    /// document; queries against an absent section fail with
    /// [`ConfigError::SectionAccess`].
    pub fn select_section(&mut self, name: impl Into<String>) -> &mut Self {
        self.selected_section = Some(name.into());
        self
    }

    /// Owned form of [`select_section`](Self::select_section).
    pub fn with_section(mut self, name: impl Into<String>) -> Self {
        self.select_section(name);
        self
    }

    pub fn current_section(&self) -> Option<&str> {
        self.selected_section.as_deref()
    }

    /// All section names in file order, regardless of the selection.
    pub fn list_sections(&self) -> Vec<&str> {
        self.document.section_names().collect()
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.document.contains_section(name)
    }

    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }

    /// Look up `key` in the selected section. `Ok(None)` means the key is
    /// absent, which is distinct from a stored `Bool(false)`.
    pub fn get(&self, key: &str) -> Result<Option<&IniValue>, ConfigError> {
        Ok(self.to_mapping()?.get(key))
    }

    pub fn to_mapping(&self) -> Result<&SectionTable, ConfigError> {
        self.selected_section
            .as_deref()
            .and_then(|name| self.document.section(name))
            .ok_or_else(|| ConfigError::SectionAccess {
                section: self.selected_section.clone(),
            })
    }

    /// Fresh iterator over the selected section's entries.
    pub fn iter(&self) -> Result<impl Iterator<Item = (&str, &IniValue)>, ConfigError> {
        Ok(self.to_mapping()?.iter())
    }

    pub fn size(&self) -> Result<usize, ConfigError> {
        Ok(self.to_mapping()?.len())
    }
}

impl ConfigPort for ConfigAccessor {
    fn value(&self, section: &str, key: &str) -> Option<&IniValue> {
        self.document.value(section, key)
    }
}
