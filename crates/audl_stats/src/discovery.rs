use crate::error::StatsError;
use async_trait::async_trait;
use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, instrument, warn};

pub const DEFAULT_BASE_URL: &str = "https://www.backend.audlstats.com/stats-pages/game/";
pub const DEFAULT_WORKERS: usize = 8;

/// Where team and schedule listings come from.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
	async fn teams(&self) -> Result<Vec<String>, StatsError>;

	async fn game_ids(&self, team: &str) -> Result<Vec<String>, StatsError>;
}

pub fn game_url(base_url: &str, game_id: &str) -> String {
	if base_url.ends_with('/') {
		format!("{base_url}{game_id}")
	} else {
		format!("{base_url}/{game_id}")
	}
}

/// The `YYYY-MM-DD` date a game id starts with.
pub fn game_date(game_id: &str) -> Option<NaiveDate> {
	NaiveDate::parse_from_str(game_id.get(..10)?, "%Y-%m-%d").ok()
}

/// Whether a game was scheduled before `until`. Ids without a date are kept.
pub fn played_before(game_id: &str, until: NaiveDate) -> bool {
	match game_date(game_id) {
		Some(date) => date < until,
		None => {
			warn!(game_id, "game id carries no date, keeping it");
			true
		}
	}
}

/// Collects the URL of every game scheduled before `until` on every team's schedule.
///
/// At most `workers` schedule lookups run at once. A game shared by two teams
/// appears once. The first failed lookup aborts discovery.
#[instrument(skip(source))]
pub async fn discover_game_urls<S>(source: &S, workers: usize, base_url: &str, until: NaiveDate) -> Result<HashSet<String>, StatsError>
where
	S: ScheduleSource + ?Sized,
{
	let teams = source.teams().await?;
	debug!(teams = teams.len(), "looking up schedules");

	let mut schedules = stream::iter(teams.iter().map(|team| source.game_ids(team))).buffer_unordered(workers.max(1));

	let mut urls = HashSet::new();
	while let Some(game_ids) = schedules.next().await {
		urls.extend(
			game_ids?
				.iter()
				.filter(|game_id| played_before(game_id, until))
				.map(|game_id| game_url(base_url, game_id)),
		);
	}

	debug!(games = urls.len(), "discovery finished");
	Ok(urls)
}

#[derive(Debug, Deserialize)]
struct TeamSchedule {
	games: Vec<ScheduledGame>,
}

#[derive(Debug, Deserialize)]
struct ScheduledGame {
	#[serde(rename = "gameID")]
	game_id: String,
}

/// Schedule listings mirrored to disk: `teams.json` plus one `<team>.json` per team.
#[derive(Debug, Clone)]
pub struct LocalScheduleSource {
	dir: PathBuf,
}

impl LocalScheduleSource {
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	async fn read_json<T: DeserializeOwned>(&self, file_name: &str) -> Result<T, StatsError> {
		let path = self.dir.join(file_name);
		let raw = tokio::fs::read_to_string(&path)
			.await
			.map_err(|e| StatsError::discovery_error(path.display(), e))?;
		serde_json::from_str(&raw).map_err(|e| StatsError::discovery_error(path.display(), e))
	}
}

#[async_trait]
impl ScheduleSource for LocalScheduleSource {
	async fn teams(&self) -> Result<Vec<String>, StatsError> {
		self.read_json("teams.json").await
	}

	async fn game_ids(&self, team: &str) -> Result<Vec<String>, StatsError> {
		let schedule: TeamSchedule = self.read_json(&format!("{team}.json")).await?;
		Ok(schedule.games.into_iter().map(|game| game.game_id).collect())
	}
}
