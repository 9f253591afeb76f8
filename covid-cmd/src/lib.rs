//! Command implementations for the COVID dashboard CLI.
//!
//! Provides subcommands for downloading the NYC Health CSVs and for
//! inspecting a local copy of them.

use clap::Subcommand;
use covid_data::datasets::DEFAULT_BASE_URL;

pub mod fetch;
pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// Download all nine source CSVs
    Fetch {
        /// Directory to write the CSV files into
        #[arg(short = 'o', long)]
        out_dir: String,

        /// Root URL the file names are appended to
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },

    /// Load every CSV in a directory and build the dashboard context
    Validate {
        #[arg(short = 'd', long)]
        data_dir: String,
    },

    /// Print the four headline counts
    Summary {
        #[arg(short = 'd', long)]
        data_dir: String,
    },

    /// Print the borough table sorted by one column
    Boroughs {
        #[arg(short = 'd', long)]
        data_dir: String,

        /// CASE, HOSPITALIZED or DEATH
        #[arg(short = 'm', long, default_value = "CASE")]
        metric: String,

        /// COUNT or RATE
        #[arg(short = 'k', long, default_value = "RATE")]
        kind: String,
    },

    /// Print the borough figure as Plotly JSON
    Figure {
        #[arg(short = 'd', long)]
        data_dir: String,

        #[arg(short = 'm', long, default_value = "CASE")]
        metric: String,

        #[arg(short = 'k', long, default_value = "RATE")]
        kind: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { out_dir, base_url } => fetch::run_fetch(&out_dir, &base_url).await,
        Command::Validate { data_dir } => report::run_validate(&data_dir),
        Command::Summary { data_dir } => report::run_summary(&data_dir),
        Command::Boroughs {
            data_dir,
            metric,
            kind,
        } => report::run_boroughs(&data_dir, &metric, &kind),
        Command::Figure {
            data_dir,
            metric,
            kind,
        } => report::run_figure(&data_dir, &metric, &kind),
    }
}
