//! Roster files: the TOML list of staff the CLI reports on.
//!
//! ```toml
//! [[staff]]
//! role = "engineer"
//! name = "小明"
//! code_num = 600
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::staff::StaffMember;

/// Bundled roster used when none is configured.
const SAMPLE_ROSTER: &str = include_str!("../config/sample-roster.toml");

/// Origin label for the bundled roster in error messages.
const SAMPLE_ORIGIN: &str = "<bundled sample roster>";

/// Staff listed in a roster file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Roster {
    #[serde(default)]
    pub staff: Vec<StaffMember>,
}

impl Roster {
    /// Load a roster from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::roster_not_found(path)
            } else {
                Error::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let roster = Self::parse(&content, path)?;
        info!(
            path = %path.display(),
            staff = roster.staff.len(),
            "Roster loaded"
        );
        Ok(roster)
    }

    /// Parse roster TOML; `origin` only labels errors.
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::RosterParse {
            path: origin.to_path_buf(),
            source: e,
        })
    }

    /// The bundled six-member sample roster.
    pub fn sample() -> Result<Self> {
        debug!("Using bundled sample roster");
        Self::parse(SAMPLE_ROSTER, Path::new(SAMPLE_ORIGIN))
    }

    /// Load `path` if given, otherwise fall back to the sample roster.
    pub fn load_or_sample(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => {
                let expanded = shellexpand::tilde(p);
                Self::load(Path::new(expanded.as_ref()))
            }
            None => Self::sample(),
        }
    }
}
