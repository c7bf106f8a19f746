//! configreader — section-scoped read-only accessor over INI files.
//!
//! Hexagonal architecture: domain types in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`].

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod ports;

use std::path::Path;

pub use adapters::file_config_adapter::FileConfigAdapter;
pub use domain::accessor::ConfigAccessor;
pub use domain::document::ConfigDocument;
pub use domain::error::ConfigError;
pub use domain::section::SectionTable;
pub use domain::value::IniValue;

/// Validate, read and parse the INI file at `path`.
///
/// Fails with [`ConfigError::InvalidPath`] when the path is not a regular file,
/// lacks the `.ini` extension or does not parse, and with
/// [`ConfigError::PermissionDenied`] when the file cannot be opened for reading.
pub fn load<P: AsRef<Path>>(
    path: P,
    initial_section: Option<&str>,
) -> Result<ConfigAccessor, ConfigError> {
    ConfigAccessor::from_source(&FileConfigAdapter::new(path), initial_section)
}
