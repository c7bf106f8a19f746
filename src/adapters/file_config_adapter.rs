//! INI file configuration adapter.

use crate::adapters::ini_parser;
use crate::domain::document::ConfigDocument;
use crate::domain::error::ConfigError;
use crate::ports::source_port::DocumentSource;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// Required file extension, compared case-sensitively.
pub const INI_EXTENSION: &str = "ini";

pub struct FileConfigAdapter {
    path: PathBuf,
}

impl FileConfigAdapter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checks, in order: regular file exists, file opens for reading,
    /// extension is `ini`.
    fn open_validated(&self) -> Result<File, ConfigError> {
        let display = self.path.display().to_string();

        match fs::metadata(&self.path) {
            Ok(meta) if meta.is_file() => {}
            _ => {
                log::debug!("{display}: rejected, not a regular file");
                return Err(ConfigError::invalid_path(display, "not a valid file"));
            }
        }

        let file = File::open(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::PermissionDenied => {
                log::debug!("{display}: rejected, not readable");
                ConfigError::PermissionDenied {
                    path: display.clone(),
                }
            }
            _ => ConfigError::Io(e),
        })?;

        if self.path.extension() != Some(OsStr::new(INI_EXTENSION)) {
            log::debug!("{display}: rejected, extension is not .{INI_EXTENSION}");
            return Err(ConfigError::invalid_path(display, "not an ini file"));
        }

        Ok(file)
    }
}

impl DocumentSource for FileConfigAdapter {
    fn load_document(&self) -> Result<ConfigDocument, ConfigError> {
        let file = self.open_validated()?;
        let display = self.path.display().to_string();
        log::debug!("reading config from {display}");

        let content = io::read_to_string(file).map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => {
                ConfigError::invalid_path(display.as_str(), "not an ini file: content is not UTF-8")
            }
            _ => ConfigError::Io(e),
        })?;

        ini_parser::parse_str(&content, &display)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
