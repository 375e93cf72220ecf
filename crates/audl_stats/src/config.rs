use crate::discovery::{DEFAULT_BASE_URL, DEFAULT_WORKERS};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
#[command(author, version, about = "Rebuilds AUDL play-by-play and possessions from stats feed documents", long_about = None)]
pub struct Config {
	/// Use JSON formatting for tracing
	#[arg(long, env = "LOG_JSON", default_value = "false", global = true)]
	pub log_json: bool,

	/// Log filter
	#[arg(long, env = "RUST_LOG", default_value = "info", global = true)]
	pub rust_log: String,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
	/// Parse saved game documents
	Parse(ParseArgs),
	/// List game URLs from a local mirror of the schedule API
	Discover(DiscoverArgs),
}

#[derive(Args, Clone, Debug)]
pub struct ParseArgs {
	/// Game documents to parse
	#[arg(required = true, value_name = "FILE")]
	pub files: Vec<PathBuf>,

	/// Print each parsed game as JSON
	#[arg(long)]
	pub json: bool,

	/// Print one line per possession
	#[arg(long)]
	pub possessions: bool,
}

#[derive(Args, Clone, Debug)]
pub struct DiscoverArgs {
	/// Directory holding teams.json and one <team>.json schedule per team
	#[arg(long, env = "SCHEDULE_DIR", value_name = "DIR")]
	pub schedule_dir: PathBuf,

	/// Schedule requests kept in flight
	#[arg(long, env = "DISCOVERY_WORKERS", default_value_t = DEFAULT_WORKERS)]
	pub workers: usize,

	/// Prefix joined with each game id
	#[arg(long, env = "GAME_BASE_URL", default_value = DEFAULT_BASE_URL)]
	pub base_url: String,

	/// Keep games dated before this day (YYYY-MM-DD), defaults to today
	#[arg(long, value_name = "DATE")]
	pub until: Option<NaiveDate>,
}
