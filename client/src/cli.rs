use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[clap(author, version)]
#[clap(name = "Quoridor Minimax Client")]
#[clap(about = "Plays and analyzes Quoridor positions with an alpha-beta search", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Play(PlayCommand),
    Analyze(AnalyzeCommand),
}

#[derive(Args)]
#[clap(about = "Plays the search against itself until the game ends", long_about = None)]
pub struct PlayCommand {
    #[clap(short, long, default_value_t = String::from("quoridor.conf"))]
    pub config: String,

    /// Opening actions to play before the search takes over, e.g. "e2 e8 d4h".
    #[clap(short, long)]
    pub moves: Option<String>,
}

#[derive(Args)]
#[clap(about = "Searches a single position and prints the result as JSON", long_about = None)]
pub struct AnalyzeCommand {
    #[clap(short, long, default_value_t = String::from("quoridor.conf"))]
    pub config: String,

    /// Actions leading to the position to analyze.
    #[clap(short, long)]
    pub moves: Option<String>,
}
