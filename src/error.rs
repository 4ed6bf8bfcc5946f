//! Errors raised around the report: config, roster and output handling.
//!
//! Staff records and visitors cannot fail. Every failure here carries a
//! numbered code (`E1xx` config, `E2xx` file access, `E3xx` roster,
//! `E4xx` output encoding, `E9xx` logging setup) whose hundreds digit picks
//! the process exit code.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ErrorCode {
    ConfigNotFound = 100,
    ConfigParse = 101,
    ConfigInvalid = 102,
    ConfigExists = 103,

    FileRead = 200,
    FileWrite = 201,

    RosterNotFound = 300,
    RosterParse = 301,

    OutputEncoding = 400,

    LoggingSetup = 900,
}

impl ErrorCode {
    /// Printable form, e.g. `E301`.
    pub fn as_str(&self) -> String {
        format!("E{}", *self as u16)
    }

    /// Ten times the hundreds digit: 10, 20, 30, 40 or 90.
    pub fn exit_code(&self) -> i32 {
        i32::from(*self as u16 / 100) * 10
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration file not found: {}", .path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to parse configuration {}: {}", .path.display(), .source)]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid {field}: {message}")]
    ConfigInvalid { field: &'static str, message: String },

    /// `config init` without `--force` on an existing file
    #[error("Configuration file already exists: {}", .path.display())]
    ConfigExists { path: PathBuf },

    #[error("Failed to read {}: {}", .path.display(), .source)]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {}", .path.display(), .source)]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Roster file not found: {}", .path.display())]
    RosterNotFound { path: PathBuf },

    #[error("Failed to parse roster {}: {}", .path.display(), .source)]
    RosterParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// `config show` could not render the settings
    #[error("Could not encode configuration: {0}")]
    Toml(#[from] toml::ser::Error),

    /// `--format json` could not render the report
    #[error("Could not encode report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logging setup failed: {0}")]
    LoggingSetup(String),
}

impl Error {
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::ConfigNotFound { .. } => ErrorCode::ConfigNotFound,
            Error::ConfigParse { .. } => ErrorCode::ConfigParse,
            Error::ConfigInvalid { .. } => ErrorCode::ConfigInvalid,
            Error::ConfigExists { .. } => ErrorCode::ConfigExists,
            Error::FileRead { .. } => ErrorCode::FileRead,
            Error::FileWrite { .. } => ErrorCode::FileWrite,
            Error::RosterNotFound { .. } => ErrorCode::RosterNotFound,
            Error::RosterParse { .. } => ErrorCode::RosterParse,
            Error::Toml(_) | Error::Json(_) => ErrorCode::OutputEncoding,
            Error::LoggingSetup(_) => ErrorCode::LoggingSetup,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.code().exit_code()
    }

    /// What the user can do about it, when there is something obvious.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::ConfigNotFound { .. } => {
                Some("Create one with 'staff-report config init', or drop --config.")
            }
            Error::ConfigParse { .. } | Error::ConfigInvalid { .. } => {
                Some("Check the file with 'staff-report config validate --config <path>'.")
            }
            Error::ConfigExists { .. } => Some("Pass --force to overwrite it."),
            Error::RosterNotFound { .. } => {
                Some("Pass an existing file with --roster, or omit it to use the bundled sample roster.")
            }
            Error::RosterParse { .. } => Some(
                "Each [[staff]] entry takes role = \"engineer\" with code_num, \
                 or role = \"manager\" with requirement_num, plus a name.",
            ),
            _ => None,
        }
    }

    /// Colored `Error [E…]` line plus an optional hint, for stderr.
    pub fn format_for_terminal(&self) -> String {
        let mut out = format!("\x1b[31mError [{}]\x1b[0m: {}\n", self.code(), self);
        if let Some(hint) = self.hint() {
            out.push_str(&format!("\n\x1b[33mHint\x1b[0m: {}\n", hint));
        }
        out
    }

    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Error::ConfigNotFound { path: path.into() }
    }

    pub fn config_invalid(field: &'static str, message: impl Into<String>) -> Self {
        Error::ConfigInvalid {
            field,
            message: message.into(),
        }
    }

    pub fn roster_not_found(path: impl Into<PathBuf>) -> Self {
        Error::RosterNotFound { path: path.into() }
    }
}
