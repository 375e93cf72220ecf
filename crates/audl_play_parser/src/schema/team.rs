use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two teams in a game. `Unknown` covers points whose boundary events are malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
	Home,
	Away,
	Unknown,
}

impl Team {
	#[must_use]
	pub const fn opponent(self) -> Self {
		match self {
			Team::Home => Team::Away,
			Team::Away => Team::Home,
			Team::Unknown => Team::Unknown,
		}
	}
}

impl fmt::Display for Team {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Team::Home => write!(f, "Home"),
			Team::Away => write!(f, "Away"),
			Team::Unknown => write!(f, "Unknown"),
		}
	}
}

/// Attacking or defending side within a point, independent of home/away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	Offense,
	Defense,
}

impl Role {
	#[must_use]
	pub const fn flip(self) -> Self {
		match self {
			Role::Offense => Role::Defense,
			Role::Defense => Role::Offense,
		}
	}
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Role::Offense => write!(f, "o"),
			Role::Defense => write!(f, "d"),
		}
	}
}
