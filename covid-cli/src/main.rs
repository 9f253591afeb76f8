//! covid-cli - download and inspect the NYC Health COVID-19 data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "covid-cli",
    version,
    about = "NYC COVID-19 dashboard data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: covid_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    covid_cmd::run(cli.command).await
}
