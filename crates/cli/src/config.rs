//! Command line / environment configuration.

use clap::{Parser, ValueEnum};

use polydemo_observability::LogFormat;

/// Rental duration used by the vehicle scenario when none is given.
pub const DEFAULT_RENTAL_HOURS: u32 = 6;

/// Run the account, payroll and rental demonstrations.
#[derive(Debug, Parser)]
#[command(name = "polydemo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Which scenario to run
    #[arg(value_enum, default_value_t = Section::All)]
    pub section: Section,

    /// Report output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Rental duration in hours
    #[arg(long, default_value_t = DEFAULT_RENTAL_HOURS)]
    pub duration: u32,

    /// Log line format (logs go to stderr; filter with RUST_LOG)
    #[arg(long, env = "POLYDEMO_LOG_FORMAT", default_value = "json")]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Accounts,
    Payroll,
    Rental,
    All,
}

impl Section {
    pub fn includes(self, other: Section) -> bool {
        self == Section::All || self == other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_run_everything_as_text() {
        let cli = Cli::try_parse_from(["polydemo"]).unwrap();
        assert_eq!(cli.section, Section::All);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.duration, DEFAULT_RENTAL_HOURS);
    }

    #[test]
    fn parses_section_and_flags() {
        let cli = Cli::try_parse_from([
            "polydemo",
            "rental",
            "--format",
            "json",
            "--duration",
            "3",
            "--log-format",
            "pretty",
        ])
        .unwrap();
        assert_eq!(cli.section, Section::Rental);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.duration, 3);
        assert_eq!(cli.log_format, LogFormat::Pretty);
    }

    #[test]
    fn all_includes_every_section() {
        assert!(Section::All.includes(Section::Payroll));
        assert!(Section::Accounts.includes(Section::Accounts));
        assert!(!Section::Accounts.includes(Section::Rental));
    }
}
