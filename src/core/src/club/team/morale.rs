use crate::club::Team;
use crate::r#match::{MatchOutcome, MatchResult};
use crate::utils::RandomSource;
use log::debug;
use serde::{Deserialize, Serialize};

const BAD_MORALE_LIMIT: u8 = 35;
const NEUTRAL_MORALE_LIMIT: u8 = 65;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum MoraleBand {
    Bad,
    Neutral,
    Good,
}

impl MoraleBand {
    pub fn from_morale(morale: u8) -> Self {
        if morale <= BAD_MORALE_LIMIT {
            MoraleBand::Bad
        } else if morale <= NEUTRAL_MORALE_LIMIT {
            MoraleBand::Neutral
        } else {
            MoraleBand::Good
        }
    }
}

/// How many random players change strength after a round, and by how much.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Progression {
    pub min_players: usize,
    pub max_players: usize,
    pub delta: i16,
}

impl Progression {
    const fn new(min_players: usize, max_players: usize, delta: i16) -> Self {
        Progression {
            min_players,
            max_players,
            delta,
        }
    }
}

pub struct MoraleModel;

impl MoraleModel {
    pub fn morale_delta(band: MoraleBand, outcome: MatchOutcome) -> i16 {
        match (band, outcome) {
            (MoraleBand::Bad, MatchOutcome::Win) => 10,
            (MoraleBand::Bad, MatchOutcome::Draw) => 3,
            (MoraleBand::Bad, MatchOutcome::Loss) => -2,
            (MoraleBand::Neutral, MatchOutcome::Win) => 7,
            (MoraleBand::Neutral, MatchOutcome::Draw) => 1,
            (MoraleBand::Neutral, MatchOutcome::Loss) => -5,
            (MoraleBand::Good, MatchOutcome::Win) => 4,
            (MoraleBand::Good, MatchOutcome::Draw) => -1,
            (MoraleBand::Good, MatchOutcome::Loss) => -8,
        }
    }

    pub fn progression(band: MoraleBand, outcome: MatchOutcome) -> Option<Progression> {
        match (band, outcome) {
            (MoraleBand::Bad, MatchOutcome::Win) => Some(Progression::new(1, 3, 1)),
            (MoraleBand::Bad, MatchOutcome::Draw) => Some(Progression::new(1, 2, -1)),
            (MoraleBand::Bad, MatchOutcome::Loss) => Some(Progression::new(3, 5, -1)),
            (MoraleBand::Neutral, MatchOutcome::Win) => Some(Progression::new(3, 5, 1)),
            (MoraleBand::Neutral, MatchOutcome::Draw) => None,
            (MoraleBand::Neutral, MatchOutcome::Loss) => Some(Progression::new(2, 3, -1)),
            (MoraleBand::Good, MatchOutcome::Win) => Some(Progression::new(5, 7, 1)),
            (MoraleBand::Good, MatchOutcome::Draw) => Some(Progression::new(1, 2, 1)),
            (MoraleBand::Good, MatchOutcome::Loss) => Some(Progression::new(1, 1, -1)),
        }
    }

    /// New snapshot of the team after one result: morale first, then player strengths.
    pub fn apply<R: RandomSource>(team: &Team, outcome: MatchOutcome, rng: &mut R) -> Team {
        let band = MoraleBand::from_morale(team.morale);
        let delta = Self::morale_delta(band, outcome);

        let updated = team.with_morale(team.morale as i16 + delta);
        let new_band = MoraleBand::from_morale(updated.morale);

        debug!(
            "team {} morale {} -> {} after {:?}",
            team.name, team.morale, updated.morale, outcome
        );

        let Some(progression) = Self::progression(new_band, outcome) else {
            return updated;
        };

        let count = rng.int_in(progression.min_players as i32, progression.max_players as i32) as usize;
        let chosen = rng.sample_indices(updated.players.len(), count);

        let players = updated
            .players
            .iter()
            .enumerate()
            .map(|(index, player)| {
                if chosen.contains(&index) {
                    player.with_strength_delta(progression.delta)
                } else {
                    player.clone()
                }
            })
            .collect();

        updated.with_players(players)
    }

    /// Applies the team's result from a completed round; teams without a match stay unchanged.
    pub fn apply_round<R: RandomSource>(team: &Team, results: &[MatchResult], rng: &mut R) -> Team {
        match results.iter().find_map(|result| result.outcome_for(team.id)) {
            Some(outcome) => Self::apply(team, outcome, rng),
            None => team.clone(),
        }
    }
}
