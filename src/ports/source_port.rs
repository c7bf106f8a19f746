//! Document source port trait.

use crate::domain::document::ConfigDocument;
use crate::domain::error::ConfigError;

/// Anything that can produce a parsed [`ConfigDocument`].
pub trait DocumentSource {
    fn load_document(&self) -> Result<ConfigDocument, ConfigError>;

    /// Human-readable origin, used in log lines.
    fn describe(&self) -> String;
}
