use anyhow::Result;
use clap::Parser;

use tagsnippet_cli::{Cli, Command, run_analyze, run_meta_tags};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("parsed arguments: {cli:?}");

    match cli.command {
        Command::Analyze(args) => run_analyze(args).await,
        Command::MetaTags(args) => run_meta_tags(args),
    }
}
