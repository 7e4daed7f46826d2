use anyhow::Result;
use clap::Parser;
use weather_dashboard::{cli::Cli, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli)?;
    weather_dashboard::run(cli).await
}
