use crate::schema::Event;
use serde::{Deserialize, Deserializer, Serialize};

/// The per-game document served by the stats backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDocument {
	pub rosters_home: Vec<RosterEntry>,
	pub rosters_away: Vec<RosterEntry>,
	pub tsg_home: TeamSeasonGame,
	pub tsg_away: TeamSeasonGame,
}

/// A team's side of the game. The event log arrives as a JSON-encoded string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSeasonGame {
	pub events: String,
}

impl TeamSeasonGame {
	pub fn decode_events(&self) -> Result<Vec<Event>, serde_json::Error> {
		serde_json::from_str(&self.events)
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
	pub id: i64,
	pub team_season_id: i64,
	pub player_id: i64,
	#[serde(default, deserialize_with = "jersey_number")]
	pub jersey_number: Option<String>,
	pub player: PlayerIdentity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerIdentity {
	pub first_name: String,
	pub last_name: String,
	pub ext_player_id: String,
}

// Jersey numbers show up both as numbers and as strings ("00").
fn jersey_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Jersey {
		Number(i64),
		Text(String),
	}

	Ok(Option::<Jersey>::deserialize(deserializer)?.map(|jersey| match jersey {
		Jersey::Number(number) => number.to_string(),
		Jersey::Text(text) => text,
	}))
}
