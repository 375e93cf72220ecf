use crate::error::{DecodeError, MalformedEventContext};
use crate::schema::{Event, EventKind, Play, PlayerRegistry, Position, Pull, Role, Throw};
use tracing::debug;

/// The two event streams of one point, cut down to the events the walk interprets.
///
/// `offense` belongs to the side that receives the pull, `defense` to the side that pulls.
/// Both have their leading boundary event removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointStreams {
	offense: Vec<Event>,
	defense: Vec<Event>,
}

impl PointStreams {
	pub fn new(offense: Vec<Event>, defense: Vec<Event>) -> Self {
		Self { offense, defense }
	}

	/// Builds the streams from two raw point sub-sequences, each still led by its boundary event.
	pub fn from_point_events(offense_point: &[Event], defense_point: &[Event]) -> Self {
		Self::new(relevant_events(offense_point), relevant_events(defense_point))
	}

	pub fn offense(&self) -> &[Event] {
		&self.offense
	}

	pub fn defense(&self) -> &[Event] {
		&self.defense
	}

	fn stream(&self, role: Role) -> &[Event] {
		match role {
			Role::Offense => &self.offense,
			Role::Defense => &self.defense,
		}
	}
}

fn relevant_events(point: &[Event]) -> Vec<Event> {
	point.iter().skip(1).filter(|event| event.kind.is_play_relevant()).cloned().collect()
}

/// Cursor into each stream plus which stream currently holds the disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkState {
	pub o_cursor: usize,
	pub d_cursor: usize,
	pub possession: Role,
}

impl WalkState {
	pub const fn start() -> Self {
		Self {
			o_cursor: 0,
			d_cursor: 0,
			possession: Role::Offense,
		}
	}

	pub const fn cursor(&self, role: Role) -> usize {
		match role {
			Role::Offense => self.o_cursor,
			Role::Defense => self.d_cursor,
		}
	}

	#[must_use]
	const fn advance(mut self, role: Role, by: usize) -> Self {
		match role {
			Role::Offense => self.o_cursor += by,
			Role::Defense => self.d_cursor += by,
		}
		self
	}

	#[must_use]
	const fn change_possession(mut self) -> Self {
		self.possession = self.possession.flip();
		self
	}
}

impl Default for WalkState {
	fn default() -> Self {
		Self::start()
	}
}

/// Result of one step: the next state, the play it produced and whether the point is over.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
	pub state: WalkState,
	pub play: Option<Play>,
	pub point_over: bool,
}

impl Transition {
	const fn finished(state: WalkState) -> Self {
		Self {
			state,
			play: None,
			point_over: true,
		}
	}

	fn play(state: WalkState, play: impl Into<Play>) -> Self {
		Self {
			state,
			play: Some(play.into()),
			point_over: false,
		}
	}
}

/// Walks the offense and defense streams of one point in lockstep.
pub struct PlayByPlay<'a> {
	point: usize,
	streams: &'a PointStreams,
	registry: &'a PlayerRegistry,
}

impl<'a> PlayByPlay<'a> {
	pub const fn new(point: usize, streams: &'a PointStreams, registry: &'a PlayerRegistry) -> Self {
		Self { point, streams, registry }
	}

	/// Runs the walk from the start of the point until it terminates.
	pub fn run(&self) -> Result<Vec<Play>, DecodeError> {
		let mut state = WalkState::start();
		let mut plays = Vec::new();

		loop {
			let transition = self.step(state)?;
			plays.extend(transition.play);
			if transition.point_over {
				debug!(point = self.point, plays = plays.len(), o_cursor = transition.state.o_cursor, d_cursor = transition.state.d_cursor, "point finished");
				return Ok(plays);
			}
			state = transition.state;
		}
	}

	/// Interprets the events under both cursors and moves the walk one step forward.
	pub fn step(&self, state: WalkState) -> Result<Transition, DecodeError> {
		if state.o_cursor > self.streams.offense.len() || state.d_cursor > self.streams.defense.len() {
			return Ok(Transition::finished(state));
		}

		let attacking = state.possession;
		let defending = attacking.flip();
		let attack_stream = self.streams.stream(attacking);
		let attack_cursor = state.cursor(attacking);

		let Some(attack) = attack_stream.get(attack_cursor) else {
			return Ok(Transition::finished(state));
		};
		// The defending stream may sit right at its end; it then neither pulls nor blocks.
		let defend = self.streams.stream(defending).get(state.cursor(defending));

		let closes = |check: fn(EventKind) -> bool| check(attack.kind) || defend.is_some_and(|event| check(event.kind));
		if closes(EventKind::closes_point) || closes(EventKind::closes_quarter) {
			return Ok(Transition::finished(state));
		}

		if let Some(pull) = defend.filter(|event| event.kind == EventKind::Pull) {
			let play = Pull {
				puller: self.registry.resolve(pull.roster_ref),
				position: pull.position(),
				hangtime_ms: pull.hangtime_ms,
			};
			return Ok(Transition::play(state.advance(defending, 1), play));
		}

		if attack.kind != EventKind::ThrowAttempt {
			return Err(self.malformed(state, Some(attack), defend));
		}

		let Some(next) = attack_stream.get(attack_cursor + 1) else {
			return Err(self.malformed(state, Some(attack), defend));
		};

		let thrower = self.registry.resolve(attack.roster_ref);
		let throw_position = self.throw_position(attack)?;

		match next.kind {
			EventKind::Throwaway => {
				let blocked = defend.is_some_and(|event| event.kind == EventKind::Block);
				let throw = if blocked {
					Throw::blocked_throwaway(thrower, throw_position)
				} else {
					Throw::throwaway(thrower, throw_position, next.position())
				};
				let state = state.advance(attacking, 2).advance(defending, 1).change_possession();
				Ok(Transition::play(state, throw))
			}
			EventKind::Stall => {
				let state = state.advance(attacking, 2).advance(defending, 1).change_possession();
				Ok(Transition::play(state, Throw::stall(thrower, throw_position)))
			}
			EventKind::Drop => {
				let receiver = self.registry.resolve(next.roster_ref);
				let throw = Throw::drop(thrower, receiver, throw_position, next.position());

				// One turnover can't be both a drop and a throwaway, so a throwaway logged
				// straight after the drop is skipped.
				let logged_twice = attack_stream.get(attack_cursor + 2).is_some_and(|event| event.kind == EventKind::Throwaway);
				let skip = if logged_twice { 3 } else { 2 };

				let state = state.advance(attacking, skip).advance(defending, 1).change_possession();
				Ok(Transition::play(state, throw))
			}
			EventKind::Goal => {
				let receiver = self.registry.resolve(next.roster_ref);
				let throw = Throw::goal(thrower, receiver, throw_position, next.position());
				Ok(Transition {
					state,
					play: Some(throw.into()),
					point_over: true,
				})
			}
			_ => {
				let receiver = self.registry.resolve(next.roster_ref);
				let throw = Throw::completion(thrower, receiver, throw_position, next.position());
				Ok(Transition::play(state.advance(attacking, 1), throw))
			}
		}
	}

	fn throw_position(&self, event: &Event) -> Result<Position, DecodeError> {
		event
			.position()
			.ok_or_else(|| DecodeError::missing_field_error(self.point, "x/y", event.kind.code()))
	}

	fn malformed(&self, state: WalkState, attack: Option<&Event>, defend: Option<&Event>) -> DecodeError {
		DecodeError::malformed_event_error(MalformedEventContext {
			point: self.point,
			possession: state.possession,
			o_cursor: state.o_cursor,
			d_cursor: state.d_cursor,
			attacking_event: attack.cloned(),
			defending_event: defend.cloned(),
			o_stream: self.streams.offense.clone(),
			d_stream: self.streams.defense.clone(),
		})
	}
}

/// Reconstructs the plays of one point.
pub fn create_play_by_play(point: usize, streams: &PointStreams, registry: &PlayerRegistry) -> Result<Vec<Play>, DecodeError> {
	PlayByPlay::new(point, streams, registry).run()
}
