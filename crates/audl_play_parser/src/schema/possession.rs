use crate::schema::{Lineup, Team, Throw, ThrowKind};
use serde::{Deserialize, Serialize};

/// A maximal run of throws by one team within a point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Possession {
	pub point: usize,
	/// Counts this team's possessions within the point, starting at zero.
	pub index: usize,
	pub team: Team,
	pub pulling_team: bool,
	pub lineup: Lineup,
	pub turnover: bool,
	pub throwaway: bool,
	pub block: bool,
	pub drop: bool,
	pub goal: bool,
	pub end_of_quarter: bool,
	pub play_by_play: Vec<Throw>,
}

impl Possession {
	pub fn last_throw(&self) -> Option<&Throw> {
		self.play_by_play.last()
	}

	/// How the possession ended, judged by its final throw.
	pub fn ending(&self) -> Option<ThrowKind> {
		self.last_throw().map(Throw::kind)
	}
}
