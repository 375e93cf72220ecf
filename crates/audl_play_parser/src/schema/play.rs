use crate::schema::{Player, Position};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pull {
	pub puller: Option<Arc<Player>>,
	pub position: Option<Position>,
	pub hangtime_ms: Option<f64>,
}

/// A throw attempt and how it ended. The facets follow the feed; `kind` collapses them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Throw {
	pub thrower: Option<Arc<Player>>,
	pub receiver: Option<Arc<Player>>,
	pub throw_position: Position,
	pub receive_position: Option<Position>,
	pub turnover: bool,
	pub throwaway: bool,
	pub block: bool,
	pub drop: bool,
	pub goal: bool,
	pub stall: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThrowKind {
	Completion,
	Goal,
	Throwaway,
	BlockedThrowaway,
	Drop,
	Stall,
}

impl ThrowKind {
	pub const fn is_turnover(self) -> bool {
		matches!(self, ThrowKind::Throwaway | ThrowKind::BlockedThrowaway | ThrowKind::Drop | ThrowKind::Stall)
	}
}

impl fmt::Display for ThrowKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			ThrowKind::Completion => "Completion",
			ThrowKind::Goal => "Goal",
			ThrowKind::Throwaway => "Throwaway",
			ThrowKind::BlockedThrowaway => "Block",
			ThrowKind::Drop => "Drop",
			ThrowKind::Stall => "Stall",
		};
		write!(f, "{}", label)
	}
}

impl Throw {
	pub fn completion(thrower: Option<Arc<Player>>, receiver: Option<Arc<Player>>, throw_position: Position, receive_position: Option<Position>) -> Self {
		Throw {
			thrower,
			receiver,
			throw_position,
			receive_position,
			turnover: false,
			throwaway: false,
			block: false,
			drop: false,
			goal: false,
			stall: false,
		}
	}

	pub fn goal(thrower: Option<Arc<Player>>, receiver: Option<Arc<Player>>, throw_position: Position, receive_position: Option<Position>) -> Self {
		Throw {
			goal: true,
			..Self::completion(thrower, receiver, throw_position, receive_position)
		}
	}

	/// The feed logs where the disc landed on the throwaway event itself.
	pub fn throwaway(thrower: Option<Arc<Player>>, throw_position: Position, landing: Option<Position>) -> Self {
		Throw {
			turnover: true,
			throwaway: true,
			..Self::completion(thrower, None, throw_position, landing)
		}
	}

	pub fn blocked_throwaway(thrower: Option<Arc<Player>>, throw_position: Position) -> Self {
		Throw {
			turnover: true,
			throwaway: true,
			block: true,
			..Self::completion(thrower, None, throw_position, None)
		}
	}

	pub fn drop(thrower: Option<Arc<Player>>, receiver: Option<Arc<Player>>, throw_position: Position, receive_position: Option<Position>) -> Self {
		Throw {
			turnover: true,
			drop: true,
			..Self::completion(thrower, receiver, throw_position, receive_position)
		}
	}

	pub fn stall(thrower: Option<Arc<Player>>, throw_position: Position) -> Self {
		Throw {
			turnover: true,
			stall: true,
			..Self::completion(thrower, None, throw_position, None)
		}
	}

	pub const fn kind(&self) -> ThrowKind {
		if self.stall {
			ThrowKind::Stall
		} else if self.drop {
			ThrowKind::Drop
		} else if self.throwaway && self.block {
			ThrowKind::BlockedThrowaway
		} else if self.throwaway {
			ThrowKind::Throwaway
		} else if self.goal {
			ThrowKind::Goal
		} else {
			ThrowKind::Completion
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Play {
	Pull(Pull),
	Throw(Throw),
}

impl Play {
	pub const fn is_pull(&self) -> bool {
		matches!(self, Play::Pull(_))
	}

	pub const fn as_throw(&self) -> Option<&Throw> {
		match self {
			Play::Throw(throw) => Some(throw),
			Play::Pull(_) => None,
		}
	}
}

impl From<Pull> for Play {
	fn from(pull: Pull) -> Self {
		Play::Pull(pull)
	}
}

impl From<Throw> for Play {
	fn from(throw: Throw) -> Self {
		Play::Throw(throw)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const ORIGIN: Position = Position::new(0.0, 0.0);

	#[test]
	fn test_constructors_classify_to_one_kind() {
		let test_cases = vec![
			(Throw::completion(None, None, ORIGIN, Some(ORIGIN)), ThrowKind::Completion),
			(Throw::goal(None, None, ORIGIN, Some(ORIGIN)), ThrowKind::Goal),
			(Throw::throwaway(None, ORIGIN, Some(ORIGIN)), ThrowKind::Throwaway),
			(Throw::blocked_throwaway(None, ORIGIN), ThrowKind::BlockedThrowaway),
			(Throw::drop(None, None, ORIGIN, Some(ORIGIN)), ThrowKind::Drop),
			(Throw::stall(None, ORIGIN), ThrowKind::Stall),
		];

		for (throw, expected) in test_cases {
			assert_eq!(throw.kind(), expected);
			assert_eq!(throw.turnover, expected.is_turnover(), "turnover facet mismatch for {}", expected);
			assert!(!(throw.goal && throw.turnover));
		}
	}

	#[test]
	fn test_blocked_throwaway_has_no_landing_spot() {
		let throw = Throw::blocked_throwaway(None, ORIGIN);
		assert!(throw.block && throw.throwaway);
		assert_eq!(throw.receive_position, None);
	}

	#[test]
	fn test_play_accessors() {
		let pull: Play = Pull {
			puller: None,
			position: None,
			hangtime_ms: Some(5100.0),
		}
		.into();
		assert!(pull.is_pull());
		assert!(pull.as_throw().is_none());

		let throw: Play = Throw::stall(None, ORIGIN).into();
		assert!(!throw.is_pull());
		assert_eq!(throw.as_throw().map(Throw::kind), Some(ThrowKind::Stall));
	}
}
