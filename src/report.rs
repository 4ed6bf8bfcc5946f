//! Running the CTO report and rendering it for output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::staff_manager::StaffManager;
use crate::visitor::CtoVisitor;

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One line per staff member
    #[default]
    Text,
    /// JSON array of report lines
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Unknown report format '{}'. Valid: text, json", s)),
        }
    }
}

/// Walk every staff member with a fresh [`CtoVisitor`].
pub fn run_cto_report(staff: &StaffManager) -> CtoVisitor {
    let mut cto = CtoVisitor::new();
    staff.accept(&mut [&mut cto]);
    info!(lines = cto.performances().len(), "CTO report generated");
    cto
}

/// Render the visitor's report in `format`.
pub fn render_report(cto: &CtoVisitor, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(cto.gen_report()),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(cto.performances())?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Roster;

    #[test]
    fn test_sample_report_text() {
        let staff = StaffManager::from(Roster::sample().unwrap());
        let cto = run_cto_report(&staff);

        assert_eq!(
            render_report(&cto, ReportFormat::Text).unwrap(),
            "产品经理:张三 需求量:5 评级:D\n\
             产品经理:李四 需求量:15 评级:C\n\
             产品经理:王麻子 需求量:25 评级:B\n\
             工程师:小明 代码量:600 评级:D\n\
             工程师:小红 代码量:6000 评级:C\n\
             工程师:小王 代码量:60000 评级:B"
        );
    }

    #[test]
    fn test_report_json() {
        let staff = StaffManager::from(Roster::sample().unwrap());
        let cto = run_cto_report(&staff);

        let json = render_report(&cto, ReportFormat::Json).unwrap();
        let lines: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "产品经理:张三 需求量:5 评级:D");
    }

    #[test]
    fn test_empty_json_report() {
        let cto = run_cto_report(&StaffManager::new());
        assert_eq!(render_report(&cto, ReportFormat::Json).unwrap(), "[]");
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("TEXT".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!("json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert!("yaml".parse::<ReportFormat>().is_err());
        assert_eq!(ReportFormat::Json.to_string(), "json");
    }
}
