use serde::{Deserialize, Serialize};

/// Event type codes as logged by the stats feed, one per team per point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum EventKind {
	OffenseStart,
	DefenseStart,
	Pull,
	Block,
	Throwaway,
	Stall,
	Drop,
	ThrowAttempt,
	Goal,
	/// Codes 23 and 24, logged once a point has been completed.
	PointClosing(i64),
	/// Codes 25 and 26, logged at the end of a quarter or of the game.
	QuarterClosing(i64),
	/// Codes 9, 18 and 21. Kept by the play filter but never matched by a transition.
	Passthrough(i64),
	Other(i64),
}

impl EventKind {
	pub const fn code(self) -> i64 {
		match self {
			EventKind::OffenseStart => 1,
			EventKind::DefenseStart => 2,
			EventKind::Pull => 3,
			EventKind::Block => 5,
			EventKind::Throwaway => 8,
			EventKind::Stall => 17,
			EventKind::Drop => 19,
			EventKind::ThrowAttempt => 20,
			EventKind::Goal => 22,
			EventKind::PointClosing(code) | EventKind::QuarterClosing(code) | EventKind::Passthrough(code) | EventKind::Other(code) => code,
		}
	}

	/// Offense-start and defense-start open a new point on a team's log.
	pub const fn is_boundary(self) -> bool {
		matches!(self, EventKind::OffenseStart | EventKind::DefenseStart)
	}

	pub const fn closes_point(self) -> bool {
		matches!(self, EventKind::PointClosing(_))
	}

	pub const fn closes_quarter(self) -> bool {
		matches!(self, EventKind::QuarterClosing(_))
	}

	/// Whether the play-by-play walk ever looks at this kind of event.
	pub const fn is_play_relevant(self) -> bool {
		!matches!(self, EventKind::OffenseStart | EventKind::DefenseStart | EventKind::Other(_))
	}
}

impl From<i64> for EventKind {
	fn from(code: i64) -> Self {
		match code {
			1 => EventKind::OffenseStart,
			2 => EventKind::DefenseStart,
			3 => EventKind::Pull,
			5 => EventKind::Block,
			8 => EventKind::Throwaway,
			17 => EventKind::Stall,
			19 => EventKind::Drop,
			20 => EventKind::ThrowAttempt,
			22 => EventKind::Goal,
			23 | 24 => EventKind::PointClosing(code),
			25 | 26 => EventKind::QuarterClosing(code),
			9 | 18 | 21 => EventKind::Passthrough(code),
			_ => EventKind::Other(code),
		}
	}
}

impl From<EventKind> for i64 {
	fn from(kind: EventKind) -> Self {
		kind.code()
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

impl Position {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// One record of a team's raw event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
	#[serde(rename = "t")]
	pub kind: EventKind,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub x: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub y: Option<f64>,
	#[serde(rename = "r", default, skip_serializing_if = "Option::is_none")]
	pub roster_ref: Option<i64>,
	#[serde(rename = "ms", default, skip_serializing_if = "Option::is_none")]
	pub hangtime_ms: Option<f64>,
	#[serde(rename = "l", default, skip_serializing_if = "Option::is_none")]
	pub roster_list: Option<Vec<i64>>,
}

impl Event {
	pub const fn new(kind: EventKind) -> Self {
		Self {
			kind,
			x: None,
			y: None,
			roster_ref: None,
			hangtime_ms: None,
			roster_list: None,
		}
	}

	#[must_use]
	pub fn at(mut self, x: f64, y: f64) -> Self {
		self.x = Some(x);
		self.y = Some(y);
		self
	}

	#[must_use]
	pub fn by(mut self, roster_ref: i64) -> Self {
		self.roster_ref = Some(roster_ref);
		self
	}

	#[must_use]
	pub fn with_hangtime(mut self, hangtime_ms: f64) -> Self {
		self.hangtime_ms = Some(hangtime_ms);
		self
	}

	#[must_use]
	pub fn with_roster(mut self, roster_list: Vec<i64>) -> Self {
		self.roster_list = Some(roster_list);
		self
	}

	/// Both coordinates, if the feed logged them.
	pub fn position(&self) -> Option<Position> {
		Some(Position::new(self.x?, self.y?))
	}
}
