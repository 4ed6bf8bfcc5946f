//! Settings for the `staff-report` binary.
//!
//! Later sources win: built-in defaults, then the config file, then
//! `STAFF_REPORT_*` variables, then command-line flags (applied in `main`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::report::ReportFormat;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub roster: RosterSettings,
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterSettings {
    /// Roster to report on; the bundled sample roster when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,

    /// Also write logs here, rotated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Under 10 rotates hourly instead of daily
    pub max_file_size_mb: u64,

    pub max_files: u32,

    pub json_format: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
            max_file_size_mb: 100,
            max_files: 5,
            json_format: false,
        }
    }
}

impl ReportConfig {
    /// Read settings from `explicit` (which must exist) or from the first
    /// config file found on the search path, then apply the environment.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let mut config = match locate(explicit)? {
            Some(path) => Self::from_file(&path)?,
            None => {
                debug!("No configuration file, using defaults");
                Self::default()
            }
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        config.expand_paths();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = toml::from_str(&text).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), "Configuration file read");
        Ok(config)
    }

    /// Overlay `STAFF_REPORT_*` values obtained through `var`.
    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(file) = var("STAFF_REPORT_ROSTER") {
            self.roster.file = Some(file);
        }
        if let Some(format) = var("STAFF_REPORT_FORMAT") {
            self.output.format = format
                .parse::<ReportFormat>()
                .map_err(|message| Error::config_invalid("STAFF_REPORT_FORMAT", message))?;
        }
        if let Some(level) = var("STAFF_REPORT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(file) = var("STAFF_REPORT_LOG_FILE") {
            self.logging.file = Some(file);
        }
        if let Some(flag) = var("STAFF_REPORT_LOG_JSON") {
            self.logging.json_format = matches!(flag.to_lowercase().as_str(), "1" | "true" | "yes");
        }
        Ok(())
    }

    fn expand_paths(&mut self) {
        for slot in [&mut self.roster.file, &mut self.logging.file] {
            if let Some(path) = slot.as_mut() {
                *path = expand(path);
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(Error::config_invalid(
                "logging.level",
                format!(
                    "'{}' is not one of {}",
                    self.logging.level,
                    LOG_LEVELS.join(", ")
                ),
            ));
        }
        if self.logging.max_files == 0 {
            return Err(Error::config_invalid("logging.max_files", "must be at least 1"));
        }
        Ok(())
    }
}

/// Config files tried in order when `--config` is not given.
fn search_path() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from("staff-report.toml")];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("staff-report").join("config.toml"));
    }
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".staff-report").join("config.toml"));
    }
    candidates
}

fn locate(explicit: Option<&str>) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            let path = PathBuf::from(expand(path));
            if path.is_file() {
                Ok(Some(path))
            } else {
                Err(Error::config_not_found(path))
            }
        }
        None => Ok(search_path().into_iter().find(|p| p.is_file())),
    }
}

/// `~` and `$VAR` expansion; the input is kept as-is if a variable is unset.
fn expand(path: &str) -> String {
    match shellexpand::full(path) {
        Ok(expanded) => expanded.into_owned(),
        Err(_) => path.to_string(),
    }
}

/// Write the commented default config to `path` (or
/// `~/.staff-report/config.toml`) and return where it went.
pub fn init_config(path: Option<&str>, force: bool) -> Result<PathBuf> {
    let target = match path {
        Some(p) => PathBuf::from(expand(p)),
        None => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".staff-report")
            .join("config.toml"),
    };

    if target.exists() && !force {
        return Err(Error::ConfigExists { path: target });
    }

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::FileWrite {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    fs::write(&target, DEFAULT_CONFIG).map_err(|e| Error::FileWrite {
        path: target.clone(),
        source: e,
    })?;
    Ok(target)
}

const DEFAULT_CONFIG: &str = r#"# staff-report configuration

[roster]
# [[staff]] entries to report on; leave unset for the bundled sample roster
# file = "~/.staff-report/roster.toml"

[output]
# text or json
format = "text"

[logging]
# trace, debug, info, warn or error
level = "warn"
# file = "~/.staff-report/logs/staff-report.log"
max_file_size_mb = 100
max_files = 5
json_format = false
"#;
