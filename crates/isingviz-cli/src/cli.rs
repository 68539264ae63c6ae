use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "isingviz - renders a multi-page chart report from tabulated Ising model observables, with automatic critical-point detection on the specific-heat curve.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the tabulated simulation output
    /// (whitespace-separated columns: T, magnetization, energy, specific heat).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output PDF report. Defaults to 'ising.pdf'.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the per-page series colors: three comma-separated
    /// '#rrggbb' values, in page order.
    #[arg(long, value_name = "LIST", value_delimiter = ',')]
    pub colors: Vec<String>,

    /// Override the page width in pixels.
    #[arg(long, value_name = "INT")]
    pub width: Option<u32>,

    /// Override the page height in pixels.
    #[arg(long, value_name = "INT")]
    pub height: Option<u32>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_invocation_parses() {
        let cli = Cli::parse_from(["isingviz", "-i", "run.dat"]);
        assert_eq!(cli.input, PathBuf::from("run.dat"));
        assert!(cli.output.is_none());
        assert!(cli.colors.is_empty());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn colors_split_on_commas() {
        let cli = Cli::parse_from(["isingviz", "-i", "run.dat", "--colors", "#102030,#405060,#708090"]);
        assert_eq!(cli.colors, vec!["#102030", "#405060", "#708090"]);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["isingviz", "-i", "run.dat", "-q", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn input_is_required() {
        let result = Cli::try_parse_from(["isingviz"]);
        assert!(result.is_err());
    }
}
