use crate::error::DecodeError;
use crate::schema::{Play, Point, Possession, Role, Team};
use tracing::debug;

/// Pulls may only open a point: once a non-pull play shows up, no pull may follow it.
pub fn validate_pull_placement(point: usize, plays: &[Play]) -> Result<(), DecodeError> {
	let pulls = plays.iter().filter(|play| play.is_pull()).count();
	let misplaced = plays.windows(2).any(|pair| !pair[0].is_pull() && pair[1].is_pull());

	if misplaced {
		let reason = if pulls > 1 {
			"point has pulls that are not all at the front"
		} else {
			"there is a pull this point, but it's not the first play"
		};
		return Err(DecodeError::pull_placement_error(point, reason));
	}

	Ok(())
}

/// Splits a point's throws into possessions at every turnover, goal and the final throw.
pub fn create_possessions(point: &Point) -> Result<Vec<Possession>, DecodeError> {
	validate_pull_placement(point.index, &point.play_by_play)?;

	let throws: Vec<_> = point.throws().collect();
	let mut possessions = Vec::new();
	let mut possession = Role::Offense;
	let mut counts = [0_usize; 2];
	let mut start = 0;

	for (throw_index, throw) in throws.iter().enumerate() {
		let last = throw_index == throws.len() - 1;
		if !(throw.turnover || throw.goal || last) {
			continue;
		}

		let team = team_for(point, possession);
		let role_count = match possession {
			Role::Offense => &mut counts[0],
			Role::Defense => &mut counts[1],
		};

		possessions.push(Possession {
			point: point.index,
			index: *role_count,
			team,
			pulling_team: possession == Role::Defense,
			lineup: point.players(team).clone(),
			turnover: throw.turnover,
			throwaway: throw.throwaway,
			block: throw.block,
			drop: throw.drop,
			goal: throw.goal,
			end_of_quarter: last && !throw.turnover && !throw.goal,
			play_by_play: throws[start..=throw_index].iter().map(|throw| (*throw).clone()).collect(),
		});
		*role_count += 1;

		debug!(point = point.index, team = %team, throws = throw_index + 1 - start, kind = %throw.kind(), "possession ended");

		if throw.turnover {
			possession = possession.flip();
			start = throw_index + 1;
		}
	}

	Ok(possessions)
}

/// The team whose log carried the throws of a role.
pub const fn team_for(point: &Point, role: Role) -> Team {
	match role {
		Role::Offense => point.offense_team,
		Role::Defense => point.defense_team,
	}
}
