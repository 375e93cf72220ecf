use audl_play_parser::schema::{ParsedGame, Point, PointStats, Possession};
use std::iter;
use std::path::Path;

fn stats_line(stats: &PointStats) -> String {
	format!(
		"completions={} throwaways={} drops={} blocks={} possessions={}",
		stats.completions, stats.throwaways, stats.drops, stats.blocks, stats.possessions
	)
}

pub fn point_line(point: &Point) -> String {
	format!(
		"point {}: pulled by {}, received by {}, scored by {}, {} plays | home {} | away {}",
		point.index,
		point.pulling_team,
		point.receiving_team,
		point.scoring_team,
		point.play_by_play.len(),
		stats_line(&point.home_stats),
		stats_line(&point.away_stats)
	)
}

pub fn possession_line(possession: &Possession) -> String {
	let ending = possession.ending().map_or_else(|| "none".to_string(), |kind| kind.to_string());
	let ending = if possession.end_of_quarter {
		format!("{ending} (end of quarter)")
	} else {
		ending
	};

	format!(
		"point {} {} #{}{}: {} throws, {}",
		possession.point,
		possession.team,
		possession.index,
		if possession.pulling_team { " (pulled)" } else { "" },
		possession.play_by_play.len(),
		ending
	)
}

/// Human readable summary of one parsed game.
pub fn game_summary(path: &Path, game: &ParsedGame, with_possessions: bool) -> String {
	let header = format!(
		"{}: {} points, {} plays, {} possessions\n",
		path.display(),
		game.points.len(),
		game.play_count(),
		game.possessions.len()
	);
	let points = game.points.iter().map(|point| format!("  {}\n", point_line(point)));
	let possessions = game
		.possessions
		.iter()
		.filter(|_| with_possessions)
		.map(|possession| format!("  {}\n", possession_line(possession)));

	iter::once(header).chain(points).chain(possessions).collect()
}
