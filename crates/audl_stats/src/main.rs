use anyhow::Context;
use audl_stats::config::{Command, Config};
use audl_stats::{discover, init_tracing, parse_games};
use clap::Parser;
use std::io;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	dotenv::dotenv().ok();

	let config = Config::parse();
	init_tracing(&config);

	let stdout = io::stdout();
	let mut out = stdout.lock();

	match &config.command {
		Command::Parse(args) => parse_games(args, &mut out).context("could not parse every game")?,
		Command::Discover(args) => {
			discover(args, &mut out)
				.await
				.with_context(|| format!("could not discover games in {}", args.schedule_dir.display()))?;
		}
	}

	Ok(())
}
