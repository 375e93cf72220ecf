use audl_play_parser::schema::{Play, Team, ThrowKind};
use audl_play_parser::{read_game_file, DecodeError, ParsedGame};
use serde_json::{json, Value};
use std::io::Write;
use std::str::FromStr;

fn roster_entry(id: i64, first_name: &str, last_name: &str) -> Value {
	let team_season_id = if id < 10 { 1 } else { 2 };
	let ext_player_id = format!("{}{}", first_name.to_lowercase(), last_name.to_lowercase());
	json!({
		"id": id,
		"team_season_id": team_season_id,
		"player_id": id + 500,
		"jersey_number": id,
		"player": {
			"first_name": first_name,
			"last_name": last_name,
			"ext_player_id": ext_player_id,
		}
	})
}

fn document(home_events: Value, away_events: Value) -> String {
	json!({
		"rostersHome": [roster_entry(1, "Ann", "Hill"), roster_entry(2, "Bo", "Hill"), roster_entry(3, "Cy", "Hill")],
		"rostersAway": [roster_entry(11, "Di", "Vale"), roster_entry(12, "Ed", "Vale"), roster_entry(13, "Fa", "Vale")],
		"tsgHome": {"events": home_events.to_string()},
		"tsgAway": {"events": away_events.to_string()},
	})
	.to_string()
}

/// Three points: a throwaway exchange, a block plus a drop logged twice, and a point cut off by the quarter.
fn full_game() -> String {
	let home = json!([
		{"t": 1},
		{"t": 1, "l": [1, 2, 3]},
		{"t": 20, "r": 1, "x": 0.0, "y": 20.0},
		{"t": 20, "r": 2, "x": 5.0, "y": 40.0},
		{"t": 8, "x": 10.0, "y": 70.0},
		{"t": 21},
		{"t": 23},
		{"t": 1, "l": [1, 2, 3]},
		{"t": 20, "r": 1, "x": 0.0, "y": 20.0},
		{"t": 8},
		{"t": 9},
		{"t": 20, "r": 2, "x": 4.0, "y": 50.0},
		{"t": 22, "r": 3, "x": 2.0, "y": 105.0},
		{"t": 23},
		{"t": 2, "l": [1, 2, 3]},
		{"t": 3, "r": 3, "x": 1.0, "y": 15.0, "ms": 4100.0}
	]);
	let away = json!([
		{"t": 2},
		{"t": 2, "l": [11, 12, 13]},
		{"t": 3, "r": 11, "x": 0.0, "y": 80.0, "ms": 4000.0},
		{"t": 9},
		{"t": 20, "r": 12, "x": 10.0, "y": 70.0},
		{"t": 20, "r": 13, "x": 12.0, "y": 90.0},
		{"t": 22, "r": 11, "x": 12.0, "y": 105.0},
		{"t": 24},
		{"t": 2, "l": [11, 12, 13]},
		{"t": 3, "r": 12, "x": -2.0, "y": 85.0, "ms": 3800.0},
		{"t": 5, "r": 13},
		{"t": 20, "r": 11, "x": 0.0, "y": 25.0},
		{"t": 19, "r": 12, "x": 5.0, "y": 60.0},
		{"t": 8},
		{"t": 21},
		{"t": 24},
		{"t": 1, "l": [11, 12, 13]},
		{"t": 20, "r": 11, "x": 0.0, "y": 30.0},
		{"t": 20, "r": 12, "x": 3.0, "y": 40.0},
		{"t": 26}
	]);
	document(home, away)
}

fn kinds(game: &ParsedGame, point: usize) -> Vec<Option<ThrowKind>> {
	game.points[point]
		.play_by_play
		.iter()
		.map(|play| play.as_throw().map(|throw| throw.kind()))
		.collect()
}

#[test]
fn test_single_goal_point() {
	let home = json!([
		{"t": 1, "l": [1, 2]},
		{"t": 20, "r": 1, "x": 0.0, "y": 10.0},
		{"t": 22, "r": 2, "x": 1.0, "y": 11.0}
	]);
	let away = json!([{"t": 2, "l": [11, 12]}]);
	let game = ParsedGame::from_str(&document(home, away)).unwrap();

	assert_eq!(game.points.len(), 1);
	let point = &game.points[0];
	assert_eq!(point.pulling_team, Team::Away);
	assert_eq!(point.receiving_team, Team::Home);
	assert_eq!(point.scoring_team, Team::Home);
	assert_eq!(point.play_by_play.len(), 1);

	let Play::Throw(throw) = &point.play_by_play[0] else {
		panic!("expected a throw");
	};
	assert_eq!(throw.thrower.as_ref().map(|p| p.name.as_str()), Some("Ann Hill"));
	assert_eq!(throw.receiver.as_ref().map(|p| p.name.as_str()), Some("Bo Hill"));
	assert!(throw.goal && !throw.turnover);

	assert_eq!(game.possessions.len(), 1);
	assert!(game.possessions[0].goal);
	assert_eq!(game.possessions[0].play_by_play.len(), 1);
	assert_eq!(game.possessions[0].team, Team::Home);
}

#[test]
fn test_point_without_puller_keeps_throws_with_their_team() {
	let home = json!([
		{"t": 1, "l": [1]},
		{"t": 20, "r": 1, "x": 0.0, "y": 10.0},
		{"t": 22, "r": 1, "x": 1.0, "y": 11.0}
	]);
	let away = json!([{"t": 1, "l": [11]}]);
	let game = ParsedGame::from_str(&document(home, away)).unwrap();

	let point = &game.points[0];
	assert_eq!(point.pulling_team, Team::Unknown);
	assert_eq!(point.offense_team, Team::Home);

	let possession = &game.possessions[0];
	assert_eq!(possession.team, Team::Home);
	assert_eq!(possession.play_by_play[0].thrower.as_ref().map(|p| p.name.as_str()), Some("Ann Hill"));
	let lineup: Vec<_> = possession.lineup.iter().map(|p| p.as_ref().map(|p| p.name.as_str())).collect();
	assert_eq!(lineup, vec![Some("Ann Hill")]);
}

#[test]
fn test_full_game_points() {
	let game = ParsedGame::from_str(&full_game()).unwrap();

	assert_eq!(game.registry.len(), 6);
	assert_eq!(game.points.len(), 3);
	assert_eq!(game.play_count(), 12);

	assert_eq!(
		kinds(&game, 0),
		vec![None, Some(ThrowKind::Completion), Some(ThrowKind::Throwaway), Some(ThrowKind::Completion), Some(ThrowKind::Goal)]
	);
	assert_eq!(
		kinds(&game, 1),
		vec![None, Some(ThrowKind::BlockedThrowaway), Some(ThrowKind::Drop), Some(ThrowKind::Goal)]
	);
	assert_eq!(kinds(&game, 2), vec![None, Some(ThrowKind::Completion), Some(ThrowKind::Completion)]);

	let sides: Vec<(Team, Team, Team)> = game.points.iter().map(|p| (p.pulling_team, p.receiving_team, p.scoring_team)).collect();
	assert_eq!(
		sides,
		vec![
			(Team::Away, Team::Home, Team::Away),
			(Team::Away, Team::Home, Team::Home),
			(Team::Home, Team::Away, Team::Unknown),
		]
	);

	let first = &game.points[0];
	assert_eq!(first.home_stats.throwaways, 1);
	assert_eq!(first.home_stats.completions, 1);
	assert_eq!(first.away_stats.completions, 2);
	assert_eq!(first.home_players.len(), 3);
	let Play::Pull(pull) = &first.play_by_play[0] else {
		panic!("expected the point to open with a pull");
	};
	assert_eq!(pull.puller.as_ref().map(|p| p.short_name.as_str()), Some("divale"));
	assert_eq!(pull.hangtime_ms, Some(4000.0));

	assert_eq!(game.points[1].away_stats.drops, 1);
	assert_eq!(game.points[1].away_stats.blocks, 1);
}

#[test]
fn test_full_game_possessions() {
	let game = ParsedGame::from_str(&full_game()).unwrap();

	let summary: Vec<(usize, Team, usize, bool, Option<ThrowKind>)> = game
		.possessions
		.iter()
		.map(|p| (p.point, p.team, p.index, p.pulling_team, p.ending()))
		.collect();
	assert_eq!(
		summary,
		vec![
			(0, Team::Home, 0, false, Some(ThrowKind::Throwaway)),
			(0, Team::Away, 0, true, Some(ThrowKind::Goal)),
			(1, Team::Home, 0, false, Some(ThrowKind::BlockedThrowaway)),
			(1, Team::Away, 0, true, Some(ThrowKind::Drop)),
			(1, Team::Home, 1, false, Some(ThrowKind::Goal)),
			(2, Team::Away, 0, false, Some(ThrowKind::Completion)),
		]
	);

	let quarter_end = game.possessions.last().unwrap();
	assert!(quarter_end.end_of_quarter);
	assert_eq!(quarter_end.play_by_play.len(), 2);
	assert!(game.possessions[..5].iter().all(|p| !p.end_of_quarter));

	for (index, point) in game.points.iter().enumerate() {
		let rejoined: Vec<_> = game.possessions_in_point(index).flat_map(|p| p.play_by_play.iter().cloned()).collect();
		let throws: Vec<_> = point.throws().cloned().collect();
		assert_eq!(rejoined, throws, "possessions of point {} must partition its throws", index);
		assert!(game.possessions_in_point(index).count() >= 1);
	}
}

#[test]
fn test_parsing_is_idempotent() {
	let raw = full_game();
	let first = ParsedGame::from_str(&raw).unwrap();
	let second = ParsedGame::from_str(&raw).unwrap();
	assert_eq!(first, second);
}

#[test]
fn test_malformed_point_fails_whole_game() {
	let home = json!([
		{"t": 1, "l": [1, 2]},
		{"t": 5},
		{"t": 20, "r": 1, "x": 0.0, "y": 10.0}
	]);
	let away = json!([{"t": 2, "l": [11, 12]}, {"t": 19}]);
	let err = ParsedGame::from_str(&document(home, away)).unwrap_err();

	let DecodeError::MalformedEvent(context) = &err else {
		panic!("expected a malformed event error");
	};
	assert_eq!(context.point, 0);
	assert_eq!(context.o_stream.len(), 2);
	assert_eq!(context.d_stream.len(), 1);
	assert_eq!(err.point(), Some(0));
	assert!(err.to_string().starts_with("Unbound event within possession"));
}

#[test]
fn test_invalid_event_log() {
	let raw = json!({
		"rostersHome": [],
		"rostersAway": [],
		"tsgHome": {"events": "[]"},
		"tsgAway": {"events": "not json"},
	})
	.to_string();
	let err = ParsedGame::from_str(&raw).unwrap_err();
	assert!(matches!(err, DecodeError::InvalidEventLog { side: Team::Away, .. }));
}

#[test]
fn test_invalid_document() {
	assert!(matches!(ParsedGame::from_str("{}"), Err(DecodeError::InvalidDocument(_))));
}

#[test]
fn test_read_game_file() {
	let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
	file.write_all(full_game().as_bytes()).unwrap();

	let game = read_game_file(file.path()).unwrap();
	assert_eq!(game.points.len(), 3);
	assert_eq!(game.possessions.len(), 6);

	assert!(matches!(read_game_file("game.html"), Err(DecodeError::File(_))));
}
