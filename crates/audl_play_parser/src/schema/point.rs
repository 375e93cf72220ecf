use crate::schema::{Event, EventKind, Lineup, Play, Team, Throw};
use serde::{Deserialize, Serialize};

/// Per-side counters taken straight from a point's raw events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointStats {
	pub throwaways: usize,
	pub drops: usize,
	pub blocks: usize,
	pub completions: usize,
	pub possessions: usize,
}

impl PointStats {
	pub fn from_events(events: &[Event]) -> Self {
		let count = |kind: EventKind| events.iter().filter(|event| event.kind == kind).count();

		PointStats {
			throwaways: count(EventKind::Throwaway),
			drops: count(EventKind::Drop),
			blocks: count(EventKind::Block),
			completions: count_completions(events),
			possessions: count_possessions(events),
		}
	}
}

// A throw attempt counts as completed when the next logged event is another throw or a goal.
fn count_completions(events: &[Event]) -> usize {
	events
		.windows(2)
		.filter(|pair| pair[0].kind == EventKind::ThrowAttempt && matches!(pair[1].kind, EventKind::ThrowAttempt | EventKind::Goal))
		.count()
}

fn count_possessions(events: &[Event]) -> usize {
	let mut possessions = 0;
	let mut in_possession = false;

	for (i, event) in events.iter().enumerate() {
		if i == 0 && event.kind == EventKind::OffenseStart {
			in_possession = true;
			possessions += 1;
		}

		match event.kind {
			EventKind::ThrowAttempt if !in_possession => {
				in_possession = true;
				possessions += 1;
			}
			EventKind::Throwaway if in_possession => in_possession = false,
			_ => {}
		}
	}

	possessions
}

/// One scored rally: both teams' raw events plus the plays reconstructed from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
	pub index: usize,
	pub home_events: Vec<Event>,
	pub away_events: Vec<Event>,
	pub pulling_team: Team,
	pub receiving_team: Team,
	pub scoring_team: Team,
	/// Owner of the log walked as the offense stream.
	pub offense_team: Team,
	pub defense_team: Team,
	pub home_players: Lineup,
	pub away_players: Lineup,
	pub home_stats: PointStats,
	pub away_stats: PointStats,
	pub play_by_play: Vec<Play>,
}

impl Point {
	/// The lineup fielded by `team`; empty when the team could not be determined.
	pub fn players(&self, team: Team) -> &Lineup {
		static NOBODY: Lineup = Vec::new();
		match team {
			Team::Home => &self.home_players,
			Team::Away => &self.away_players,
			Team::Unknown => &NOBODY,
		}
	}

	pub fn stats(&self, team: Team) -> Option<&PointStats> {
		match team {
			Team::Home => Some(&self.home_stats),
			Team::Away => Some(&self.away_stats),
			Team::Unknown => None,
		}
	}

	pub fn throws(&self) -> impl Iterator<Item = &Throw> {
		self.play_by_play.iter().filter_map(Play::as_throw)
	}
}
