use audl_play_parser::DecodeError;
use std::fmt::Display;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
	#[error("Failed to parse game {}: {source}", .path.display())]
	Game { path: PathBuf, source: DecodeError },

	#[error("{failed} of {total} games failed to parse")]
	FailedGames { failed: usize, total: usize },

	#[error("Schedule lookup for {target} failed: {reason}")]
	Discovery { target: String, reason: String },

	#[error(transparent)]
	Json(#[from] serde_json::Error),

	#[error(transparent)]
	Io(#[from] io::Error),
}

impl StatsError {
	pub fn game_error(path: impl Into<PathBuf>, source: DecodeError) -> Self {
		StatsError::Game { path: path.into(), source }
	}

	pub fn discovery_error(target: impl Display, reason: impl Display) -> Self {
		StatsError::Discovery {
			target: target.to_string(),
			reason: reason.to_string(),
		}
	}
}
