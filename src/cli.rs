//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::domain::accessor::ConfigAccessor;
use crate::domain::error::ConfigError;

/// Exit status when `get` finds no such key in the section.
pub const KEY_MISSING_EXIT: u8 = 5;

#[derive(Parser, Debug)]
#[command(name = "configreader", about = "Inspect sections and keys of an INI file")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List section names in file order
    Sections { file: PathBuf },
    /// Print the value stored under a key
    Get {
        file: PathBuf,
        #[arg(short, long)]
        section: String,
        key: String,
    },
    /// Print every key of a section as `key = value`
    Dump {
        file: PathBuf,
        #[arg(short, long)]
        section: String,
    },
    /// Print the number of keys in a section
    Count {
        file: PathBuf,
        #[arg(short, long)]
        section: String,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Done,
    KeyMissing { section: String, key: String },
}

pub fn run(cli: Cli) -> ExitCode {
    let result = execute(&cli.command, &mut io::stdout().lock());
    ExitCode::from(report(&result, &mut io::stderr().lock()))
}

/// Write the failure message for `result` to `err` and return the exit status.
pub fn report(result: &Result<Outcome, ConfigError>, err: &mut dyn Write) -> u8 {
    let (code, message) = match result {
        Ok(Outcome::Done) => return 0,
        Ok(Outcome::KeyMissing { section, key }) => (
            KEY_MISSING_EXIT,
            format!("key {key} not found in [{section}]"),
        ),
        Err(e) => (e.exit_code(), e.to_string()),
    };
    // Nothing useful to do if stderr itself is gone.
    let _ = writeln!(err, "error: {message}");
    code
}

/// Run one command, writing its normal output to `out`.
pub fn execute(command: &Command, out: &mut dyn Write) -> Result<Outcome, ConfigError> {
    match command {
        Command::Sections { file } => {
            let ini = load_config(file, None)?;
            for name in ini.list_sections() {
                writeln!(out, "{name}")?;
            }
        }
        Command::Get { file, section, key } => {
            let ini = load_config(file, Some(section.as_str()))?;
            match ini.get(key)? {
                Some(value) => writeln!(out, "{value}")?,
                None => {
                    return Ok(Outcome::KeyMissing {
                        section: section.clone(),
                        key: key.clone(),
                    });
                }
            }
        }
        Command::Dump { file, section } => {
            let ini = load_config(file, Some(section.as_str()))?;
            for (key, value) in ini.iter()? {
                writeln!(out, "{key} = {value}")?;
            }
        }
        Command::Count { file, section } => {
            let ini = load_config(file, Some(section.as_str()))?;
            writeln!(out, "{}", ini.size()?)?;
        }
    }
    Ok(Outcome::Done)
}

pub fn load_config(path: &Path, section: Option<&str>) -> Result<ConfigAccessor, ConfigError> {
    log::info!("loading config from {}", path.display());
    crate::load(path, section)
}
