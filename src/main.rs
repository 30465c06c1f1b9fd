mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use metro_routing::{
    logging,
    network::{MetroNetwork, Station, adapters::JsonAdapter},
    report::{QueryReport, line_reports},
};

use crate::cli::{Cli, Commands, Format};

const DEMO_JOURNEYS: [(&str, &str); 3] = [("M1", "K4"), ("T1", "T4"), ("T4", "M1")];

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json)?;

    let now = std::time::Instant::now();
    let adapter = match &cli.network {
        Some(path) => JsonAdapter::from_path(path)?,
        None => JsonAdapter::ankara()?,
    };
    let network = MetroNetwork::from_adapter(&adapter).context("building network")?;
    tracing::info!(stations = network.len(), elapsed = ?now.elapsed(), "network loaded");

    match cli.command {
        Commands::Route { from, to } => {
            let from = resolve(&network, &from)?;
            let to = resolve(&network, &to)?;
            let report = QueryReport::build(&network, from, to)?;

            match cli.format {
                Format::Human => print!("{report}"),
                Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
        Commands::Demo => {
            let mut reports = vec![];
            for (from, to) in DEMO_JOURNEYS {
                let from = resolve(&network, from)?;
                let to = resolve(&network, to)?;
                reports.push(QueryReport::build(&network, from, to)?);
            }

            match cli.format {
                Format::Human => {
                    for report in &reports {
                        println!("{report}");
                    }
                }
                Format::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
            }
        }
        Commands::Stations => {
            let lines = line_reports(&network);

            match cli.format {
                Format::Human => {
                    for line in &lines {
                        println!("{line}");
                    }
                }
                Format::Json => println!("{}", serde_json::to_string_pretty(&lines)?),
            }
        }
    }

    Ok(())
}

fn resolve<'a>(network: &'a MetroNetwork, query: &str) -> Result<&'a Station> {
    match network.resolve(query) {
        Some(station) => Ok(station),
        None => bail!("station not found: {query}"),
    }
}
