//! Domain error types.

/// Top-level error type for configreader.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid path {path}: {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("insufficient permission to read file: {path}")]
    PermissionDenied { path: String },

    #[error("{}", section_access_message(.section))]
    SectionAccess { section: Option<String> },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Process exit status reported by the CLI for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            ConfigError::Io(_) => 1,
            ConfigError::InvalidPath { .. } => 2,
            ConfigError::PermissionDenied { .. } => 3,
            ConfigError::SectionAccess { .. } => 4,
        }
    }

    pub(crate) fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

fn section_access_message(section: &Option<String>) -> String {
    match section {
        None => "no section selected".to_string(),
        Some(name) => format!("section [{name}] not found"),
    }
}

impl From<&ConfigError> for std::process::ExitCode {
    fn from(err: &ConfigError) -> Self {
        std::process::ExitCode::from(err.exit_code())
    }
}
