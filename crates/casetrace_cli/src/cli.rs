//! CLI argument definitions using clap derive macros.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Terminal client for the crime-research assistant
#[derive(Parser)]
#[command(name = "casetrace", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,

    /// API base URL. Uses CASETRACE_API_URL env if not set.
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ask the assistant one question and print the structured reply
    Chat {
        /// The question to send
        message: String,
    },
    /// Search crime cases with structured filters
    Search(SearchArgs),
    /// Check backend health
    Health,
    /// List the backend's predefined search templates
    Templates,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Time period as "YYYY-MM-DD to YYYY-MM-DD"
    #[arg(long)]
    pub time_period: Option<String>,

    /// Geographic focus area (e.g. Global, Middle East)
    #[arg(long)]
    pub focus: Option<String>,

    /// Crime type filter, repeatable (e.g. fraud, terrorism, organized_crime)
    #[arg(long = "crime-type")]
    pub crime_types: Vec<String>,

    /// Minimum severity: low, medium, high, critical
    #[arg(long)]
    pub severity: Option<String>,

    /// Maximum number of results
    #[arg(long)]
    pub max_results: Option<u32>,

    /// Continent filter
    #[arg(long)]
    pub continent: Option<String>,

    /// Country filter
    #[arg(long)]
    pub country: Option<String>,

    /// City filter
    #[arg(long)]
    pub city: Option<String>,

    /// Case status filter: ongoing, solved, cold_case, closed
    #[arg(long)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_flags_parse() {
        let cli = Cli::try_parse_from([
            "casetrace",
            "search",
            "--focus",
            "Middle East",
            "--crime-type",
            "fraud",
            "--crime-type",
            "cyber_crime",
            "--country",
            "UAE",
        ])
        .unwrap();

        match cli.command {
            Command::Search(args) => {
                assert_eq!(args.focus.as_deref(), Some("Middle East"));
                assert_eq!(args.crime_types, vec!["fraud", "cyber_crime"]);
                assert_eq!(args.country.as_deref(), Some("UAE"));
            }
            _ => panic!("expected search command"),
        }
    }
}
