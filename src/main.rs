use clap::Parser;
use tracing::{debug, info};

use staff_report::cli::{Cli, Commands, ConfigSubcommand};
use staff_report::config::{self, LoggingSettings, ReportConfig};
use staff_report::error::Result;
use staff_report::report::{self, ReportFormat};
use staff_report::{logging, version, Roster, StaffManager};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprint!("{}", e.format_for_terminal());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Version => {
            version::print_version();
            Ok(())
        }
        Commands::Config { subcommand } => {
            // The file under inspection may itself be broken, so log with defaults
            let _guards = logging::init_logging(&LoggingSettings::default(), cli.verbose, cli.quiet)?;
            config_command(subcommand)
        }
        Commands::Report {
            config,
            roster,
            format,
        } => {
            let settings = ReportConfig::load(config.as_deref())?;
            let _guards = logging::init_logging(&settings.logging, cli.verbose, cli.quiet)?;
            debug!(version = %version::full_version(), "staff-report starting");

            let roster = roster.or(settings.roster.file);
            let format = format.unwrap_or(settings.output.format);
            print_report(roster.as_deref(), format)
        }
    }
}

fn print_report(roster_path: Option<&str>, format: ReportFormat) -> Result<()> {
    let staff = StaffManager::from(Roster::load_or_sample(roster_path)?);
    info!(
        staff = staff.len(),
        roster = roster_path.unwrap_or("(sample)"),
        %format,
        "Running CTO report"
    );

    let cto = report::run_cto_report(&staff);
    println!("{}", report::render_report(&cto, format)?);
    Ok(())
}

fn config_command(subcommand: ConfigSubcommand) -> Result<()> {
    match subcommand {
        ConfigSubcommand::Show { config } => {
            let settings = ReportConfig::load(config.as_deref())?;
            print!("{}", toml::to_string_pretty(&settings)?);
        }
        ConfigSubcommand::Init { path, force } => {
            let written = config::init_config(path.as_deref(), force)?;
            println!("Configuration file created: {}", written.display());
        }
        ConfigSubcommand::Validate { config } => {
            ReportConfig::load(config.as_deref())?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}
