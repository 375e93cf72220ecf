pub mod config;
pub mod discovery;
pub mod error;
pub mod report;

use crate::config::{Config, DiscoverArgs, ParseArgs};
use crate::discovery::{discover_game_urls, LocalScheduleSource};
use crate::error::StatsError;
use audl_play_parser::read_game_file;
use chrono::Local;
use std::io::Write;
use tracing::{error, info};
use tracing_subscriber::{filter::EnvFilter, fmt::format::JsonFields, util::SubscriberInitExt, Layer};

/// Parses every game in `args.files`, writing one report per game to `out`.
///
/// A game that fails is logged and skipped; the others are still reported.
pub fn parse_games(args: &ParseArgs, out: &mut impl Write) -> Result<(), StatsError> {
	let mut failed = 0;

	for path in &args.files {
		match read_game_file(path) {
			Ok(game) => {
				info!(path = %path.display(), points = game.points.len(), possessions = game.possessions.len(), "parsed game");
				if args.json {
					serde_json::to_writer_pretty(&mut *out, &game)?;
					writeln!(out)?;
				} else {
					write!(out, "{}", report::game_summary(path, &game, args.possessions))?;
				}
			}
			Err(source) => {
				let point = source.point();
				let err = StatsError::game_error(path, source);
				error!(point = ?point, "{err}");
				failed += 1;
			}
		}
	}

	if failed > 0 {
		return Err(StatsError::FailedGames {
			failed,
			total: args.files.len(),
		});
	}
	Ok(())
}

/// Lists the URL of every already played game in the schedule mirror, sorted.
pub async fn discover(args: &DiscoverArgs, out: &mut impl Write) -> Result<Vec<String>, StatsError> {
	let source = LocalScheduleSource::new(&args.schedule_dir);
	let until = args.until.unwrap_or_else(|| Local::now().date_naive());
	let mut urls: Vec<String> = discover_game_urls(&source, args.workers, &args.base_url, until).await?.into_iter().collect();
	urls.sort();

	info!(games = urls.len(), "discovered games");
	for url in &urls {
		writeln!(out, "{url}")?;
	}
	Ok(urls)
}

pub fn init_tracing(config: &Config) {
	use tracing_subscriber::layer::SubscriberExt;

	let filter = EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::registry()
		.with(if config.log_json {
			Box::new(
				tracing_subscriber::fmt::layer()
					.fmt_fields(JsonFields::default())
					.event_format(tracing_subscriber::fmt::format().json().flatten_event(true).with_span_list(false))
					.with_writer(std::io::stderr)
					.with_filter(filter),
			) as Box<dyn Layer<_> + Send + Sync>
		} else {
			Box::new(
				tracing_subscriber::fmt::layer()
					.event_format(tracing_subscriber::fmt::format().pretty())
					.with_writer(std::io::stderr)
					.with_filter(filter),
			)
		})
		.init();
}
