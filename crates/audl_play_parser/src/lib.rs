pub mod error;
pub mod parsers;
pub mod schema;

pub use error::DecodeError;
pub use parsers::parse_game;
pub use schema::{GameDocument, ParsedGame};

use file_reader::FileReader;
use std::path::Path;

/// Loads a saved game document (`.json`) and parses it.
pub fn read_game_file(file_path: impl AsRef<Path>) -> Result<ParsedGame, DecodeError> {
	let reader = FileReader::new(file_path, "json")?;
	let document: GameDocument = reader.read_json()?;
	parse_game(&document)
}
