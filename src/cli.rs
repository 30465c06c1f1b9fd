use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "metro_routing", version, about = "Fewest-stop and fastest metro routes")]
pub struct Cli {
    /// JSON network description; the embedded Ankara sample when omitted
    #[arg(long, global = true, env = "METRO_NETWORK")]
    pub network: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = Format::Human)]
    pub format: Format,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log filter, e.g. `debug` or `metro_routing=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fewest-stop and fastest routes between two stations, by id or name
    Route { from: String, to: String },
    /// Reference journeys on the sample network
    Demo,
    /// Stations grouped by line
    Stations,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Human,
    Json,
}
