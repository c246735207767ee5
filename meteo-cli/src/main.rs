//! meteo-cli - Command line tool for inspecting the dashboard datasets.

use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(
    name = "meteo-cli",
    version,
    about = "ERA5/METAR airport weather data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: commands::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    commands::run(cli.command).await
}
