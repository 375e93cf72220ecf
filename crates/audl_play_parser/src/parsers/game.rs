use crate::error::DecodeError;
use crate::parsers::play_by_play::create_play_by_play;
use crate::parsers::point_builder::PointBuilder;
use crate::parsers::possessions::create_possessions;
use crate::parsers::segmenter::segment_points;
use crate::schema::{Event, GameDocument, ParsedGame, PlayerRegistry, Point, Team};
use tracing::{debug, instrument, warn};

/// Reconstructs points, plays and possessions from one game's document.
#[instrument(skip_all, fields(home_roster = document.rosters_home.len(), away_roster = document.rosters_away.len()))]
pub fn parse_game(document: &GameDocument) -> Result<ParsedGame, DecodeError> {
	let home_events = document
		.tsg_home
		.decode_events()
		.map_err(|source| DecodeError::InvalidEventLog { side: Team::Home, source })?;
	let away_events = document
		.tsg_away
		.decode_events()
		.map_err(|source| DecodeError::InvalidEventLog { side: Team::Away, source })?;

	let home_points = segment_points(home_events);
	let away_points = segment_points(away_events);
	if home_points.len() != away_points.len() {
		warn!(home = home_points.len(), away = away_points.len(), "teams logged a different number of points, extra points are ignored");
	}

	let registry = PlayerRegistry::from_rosters(&document.rosters_home, &document.rosters_away);

	let points = home_points
		.into_iter()
		.zip(away_points)
		.enumerate()
		.map(|(index, (home, away))| build_point(index, home, away, &registry))
		.collect::<Result<Vec<_>, _>>()?;

	let mut possessions = Vec::new();
	for point in &points {
		possessions.extend(create_possessions(point)?);
	}

	debug!(points = points.len(), possessions = possessions.len(), "game parsed");

	Ok(ParsedGame {
		registry,
		points,
		possessions,
	})
}

fn build_point(index: usize, home: Vec<Event>, away: Vec<Event>, registry: &PlayerRegistry) -> Result<Point, DecodeError> {
	let builder = PointBuilder::new(index, home, away, registry);
	let play_by_play = create_play_by_play(index, &builder.streams(), registry)?;
	debug!(point = index, pulling = %builder.pulling_team(), plays = play_by_play.len(), "point built");
	Ok(builder.build(play_by_play))
}
