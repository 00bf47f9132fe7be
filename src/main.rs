use anyhow::Result;
use clap::Parser;
use sigmap::cli::{Cli, Commands};
use sigmap::commands::analyze::{handle_analyze, AnalyzeConfig};
use sigmap::commands::census::{handle_census, CensusConfig};
use sigmap::commands::init::init_config;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            singular,
            database,
            policy,
            config,
        } => handle_analyze(AnalyzeConfig {
            path,
            format,
            output,
            singular,
            database,
            policy,
            config,
        }),
        Commands::Census {
            path,
            format,
            config,
        } => handle_census(CensusConfig {
            path,
            format,
            config,
        }),
        Commands::Init { force } => init_config(force),
    }
}
