//! Command-line surface of `staff-report`.

use clap::{ArgAction, Parser, Subcommand};

use crate::report::ReportFormat;
use crate::version;

/// Grade engineers and product managers and print the CTO report.
#[derive(Parser, Debug)]
#[command(name = "staff-report", version, long_version = version::long_version())]
#[command(propagate_version = true)]
pub struct Cli {
    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the CTO performance report
    Report {
        /// Config file to use instead of the search path
        #[arg(short, long, env = "STAFF_REPORT_CONFIG")]
        config: Option<String>,

        /// Roster TOML to report on
        #[arg(short, long)]
        roster: Option<String>,

        #[arg(short, long, value_enum)]
        format: Option<ReportFormat>,
    },

    /// Show version and build details
    Version,

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigSubcommand {
    /// Print the effective settings as TOML
    Show {
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Write a commented default config file
    Init {
        /// Destination (default ~/.staff-report/config.toml)
        #[arg(short, long)]
        path: Option<String>,

        /// Replace an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Load a config file and report any problem
    Validate {
        #[arg(short, long)]
        config: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("staff-report").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_report() {
        let Commands::Report { config, roster, format } = parse(&["report"]).command else {
            panic!("expected report");
        };
        assert_eq!((config, roster, format), (None, None, None));
    }

    #[test]
    fn test_report_flags() {
        let cli = parse(&["-v", "report", "-r", "team.toml", "--format", "json"]);
        assert_eq!(cli.verbose, 1);
        let Commands::Report { roster, format, .. } = cli.command else {
            panic!("expected report");
        };
        assert_eq!(roster.as_deref(), Some("team.toml"));
        assert_eq!(format, Some(ReportFormat::Json));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["report", "-vv", "--quiet"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
    }

    #[test]
    fn test_unknown_format_is_a_usage_error() {
        let err = Cli::try_parse_from(["staff-report", "report", "--format", "yaml"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_config_init_force() {
        let cli = parse(&["config", "init", "-f"]);
        assert!(matches!(
            cli.command,
            Commands::Config {
                subcommand: ConfigSubcommand::Init { path: None, force: true }
            }
        ));
    }
}
