use crate::schema::Event;
use tracing::debug;

/// Splits one team's chronological log into points. Each boundary event opens a new point.
pub fn events_per_point(events: Vec<Event>) -> Vec<Vec<Event>> {
	let mut points = Vec::new();
	let mut current_point = Vec::new();

	for event in events {
		// The very first boundary arrives with nothing accumulated yet
		if event.kind.is_boundary() && !current_point.is_empty() {
			points.push(std::mem::take(&mut current_point));
		}
		current_point.push(event);
	}

	points.push(current_point);
	points
}

/// Drops points without any event that carries an on-field roster.
pub fn filter_empty_points(points: Vec<Vec<Event>>) -> Vec<Vec<Event>> {
	points
		.into_iter()
		.filter(|point| {
			let has_roster = point.iter().any(|event| event.roster_list.is_some());
			if !has_roster {
				debug!(events = point.len(), "dropping point without a roster");
			}
			has_roster
		})
		.collect()
}

pub fn segment_points(events: Vec<Event>) -> Vec<Vec<Event>> {
	filter_empty_points(events_per_point(events))
}
