use crate::parsers::play_by_play::PointStreams;
use crate::schema::{Event, EventKind, Lineup, Play, PlayerRegistry, Point, PointStats, Team};

fn opens_with(point: &[Event], kind: EventKind) -> bool {
	point.first().is_some_and(|event| event.kind == kind)
}

pub fn pulling_team(home_point: &[Event], away_point: &[Event]) -> Team {
	if opens_with(away_point, EventKind::DefenseStart) {
		Team::Away
	} else if opens_with(home_point, EventKind::DefenseStart) {
		Team::Home
	} else {
		Team::Unknown
	}
}

pub fn receiving_team(home_point: &[Event], away_point: &[Event]) -> Team {
	if opens_with(away_point, EventKind::OffenseStart) {
		Team::Away
	} else if opens_with(home_point, EventKind::OffenseStart) {
		Team::Home
	} else {
		Team::Unknown
	}
}

pub fn scoring_team(home_point: &[Event], away_point: &[Event]) -> Team {
	let scored = |point: &[Event]| point.iter().any(|event| event.kind == EventKind::Goal);
	match (scored(home_point), scored(away_point)) {
		(true, false) => Team::Home,
		(false, true) => Team::Away,
		_ => Team::Unknown,
	}
}

fn on_field(point: &[Event], registry: &PlayerRegistry) -> Lineup {
	point
		.iter()
		.find_map(|event| event.roster_list.as_deref())
		.map(|roster_list| registry.lineup(roster_list))
		.unwrap_or_default()
}

/// First phase of building a `Point`: everything derivable from the raw events alone.
#[derive(Debug, Clone)]
pub struct PointBuilder {
	index: usize,
	home_events: Vec<Event>,
	away_events: Vec<Event>,
	pulling_team: Team,
	receiving_team: Team,
	scoring_team: Team,
	home_players: Lineup,
	away_players: Lineup,
}

impl PointBuilder {
	pub fn new(index: usize, home_events: Vec<Event>, away_events: Vec<Event>, registry: &PlayerRegistry) -> Self {
		Self {
			index,
			pulling_team: pulling_team(&home_events, &away_events),
			receiving_team: receiving_team(&home_events, &away_events),
			scoring_team: scoring_team(&home_events, &away_events),
			home_players: on_field(&home_events, registry),
			away_players: on_field(&away_events, registry),
			home_events,
			away_events,
		}
	}

	pub const fn index(&self) -> usize {
		self.index
	}

	pub const fn pulling_team(&self) -> Team {
		self.pulling_team
	}

	/// The side whose log is walked as the offense: away when home pulled, home otherwise.
	pub const fn offense_team(&self) -> Team {
		if matches!(self.pulling_team, Team::Home) {
			Team::Away
		} else {
			Team::Home
		}
	}

	pub fn streams(&self) -> PointStreams {
		match self.offense_team() {
			Team::Away => PointStreams::from_point_events(&self.away_events, &self.home_events),
			_ => PointStreams::from_point_events(&self.home_events, &self.away_events),
		}
	}

	pub fn build(self, play_by_play: Vec<Play>) -> Point {
		let offense_team = self.offense_team();
		Point {
			index: self.index,
			home_stats: PointStats::from_events(&self.home_events),
			away_stats: PointStats::from_events(&self.away_events),
			home_events: self.home_events,
			away_events: self.away_events,
			pulling_team: self.pulling_team,
			receiving_team: self.receiving_team,
			scoring_team: self.scoring_team,
			offense_team,
			defense_team: offense_team.opponent(),
			home_players: self.home_players,
			away_players: self.away_players,
			play_by_play,
		}
	}
}
