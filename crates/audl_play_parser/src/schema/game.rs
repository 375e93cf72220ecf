use crate::error::DecodeError;
use crate::schema::{GameDocument, PlayerRegistry, Point, Possession};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Everything reconstructed from one game's document. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedGame {
	pub registry: PlayerRegistry,
	pub points: Vec<Point>,
	pub possessions: Vec<Possession>,
}

impl ParsedGame {
	pub fn from_document(document: &GameDocument) -> Result<Self, DecodeError> {
		crate::parsers::parse_game(document)
	}

	pub fn possessions_in_point(&self, point: usize) -> impl Iterator<Item = &Possession> {
		self.possessions.iter().filter(move |possession| possession.point == point)
	}

	pub fn play_count(&self) -> usize {
		self.points.iter().map(|point| point.play_by_play.len()).sum()
	}
}

impl FromStr for ParsedGame {
	type Err = DecodeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let document: GameDocument = serde_json::from_str(s)?;
		Self::from_document(&document)
	}
}
