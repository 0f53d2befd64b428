mod analyze;
mod cli;
mod play;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use common::{ConfigLoader, FsExt};
use dotenv::dotenv;
use env_logger::Env;
use minimax::SearchOptions;
use quoridor::Rules;

const CONFIG_SCOPE: &str = "match";

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Play(play_args) => {
            let (rules, options) = load_config(&play_args.config)?;

            play::play_match(rules, options, play_args.moves.as_deref())?;
        }
        Commands::Analyze(analyze_args) => {
            let (rules, options) = load_config(&analyze_args.config)?;
            let analysis = analyze::analyze(rules, options, analyze_args.moves.as_deref())?;

            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
    }

    Ok(())
}

fn load_config(config_path: &str) -> Result<(Rules, SearchOptions)> {
    let config_path = config_path.assert_file_exists()?;
    let config = ConfigLoader::new(config_path, CONFIG_SCOPE.to_string())?;

    Ok((config.load()?, config.load()?))
}
