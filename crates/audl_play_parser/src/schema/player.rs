use crate::schema::RosterEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
	pub id: i64,
	pub team_season_id: i64,
	pub player_id: i64,
	pub jersey_number: Option<String>,
	pub name: String,
	pub short_name: String,
}

impl From<&RosterEntry> for Player {
	fn from(entry: &RosterEntry) -> Self {
		Player {
			id: entry.id,
			team_season_id: entry.team_season_id,
			player_id: entry.player_id,
			jersey_number: entry.jersey_number.clone(),
			name: format!("{} {}", entry.player.first_name, entry.player.last_name),
			short_name: entry.player.ext_player_id.clone(),
		}
	}
}

/// Players on the field for one side, in roster-list order. Unresolvable entries stay `None`.
pub type Lineup = Vec<Option<Arc<Player>>>;

/// Roster-entry id to player, for both teams of one game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRegistry {
	players: HashMap<i64, Arc<Player>>,
}

impl PlayerRegistry {
	/// Home entries go in first, so an away entry with the same id replaces it.
	pub fn from_rosters(home: &[RosterEntry], away: &[RosterEntry]) -> Self {
		let mut players = HashMap::with_capacity(home.len() + away.len());

		for entry in home.iter().chain(away) {
			let player = Arc::new(Player::from(entry));
			if let Some(previous) = players.insert(entry.id, player) {
				warn!(roster_id = entry.id, replaced = %previous.name, "roster id appears more than once, keeping the last entry");
			}
		}

		Self { players }
	}

	pub fn get(&self, roster_id: i64) -> Option<&Arc<Player>> {
		self.players.get(&roster_id)
	}

	/// Absent and negative references denote events without an attributable player.
	pub fn resolve(&self, roster_ref: Option<i64>) -> Option<Arc<Player>> {
		let roster_id = roster_ref.filter(|id| *id >= 0)?;
		let player = self.players.get(&roster_id).cloned();
		if player.is_none() {
			warn!(roster_id, "roster reference does not match any player");
		}
		player
	}

	pub fn lineup(&self, roster_list: &[i64]) -> Lineup {
		roster_list.iter().map(|roster_id| self.resolve(Some(*roster_id))).collect()
	}

	pub fn len(&self) -> usize {
		self.players.len()
	}

	pub fn is_empty(&self) -> bool {
		self.players.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Arc<Player>> {
		self.players.values()
	}
}
