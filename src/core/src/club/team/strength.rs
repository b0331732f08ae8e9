use crate::club::{Player, PlayerFieldPositionGroup, Team};
use crate::utils::RandomSource;
use serde::{Deserialize, Serialize};

const MOOD_SPREAD: i32 = 20;
const STRENGTH_JITTER: i32 = 2;

/// Summed strength per position group of a set of players.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStrength {
    pub goalkeeping: u32,
    pub defense: u32,
    pub midfield: u32,
    pub attack: u32,
}

impl TeamStrength {
    pub fn from_players<'p>(players: impl IntoIterator<Item = &'p Player>) -> Self {
        players
            .into_iter()
            .fold(TeamStrength::default(), |mut strength, player| {
                let value = player.strength as u32;
                match player.position {
                    PlayerFieldPositionGroup::Goalkeeper => strength.goalkeeping += value,
                    PlayerFieldPositionGroup::Defender => strength.defense += value,
                    PlayerFieldPositionGroup::Midfielder => strength.midfield += value,
                    PlayerFieldPositionGroup::Forward => strength.attack += value,
                }
                strength
            })
    }

    pub fn group(&self, group: PlayerFieldPositionGroup) -> u32 {
        match group {
            PlayerFieldPositionGroup::Goalkeeper => self.goalkeeping,
            PlayerFieldPositionGroup::Defender => self.defense,
            PlayerFieldPositionGroup::Midfielder => self.midfield,
            PlayerFieldPositionGroup::Forward => self.attack,
        }
    }

    /// Resistance against shots: defenders plus goalkeepers.
    pub fn defensive_wall(&self) -> u32 {
        self.defense + self.goalkeeping
    }

    pub fn total(&self) -> u32 {
        self.goalkeeping + self.defense + self.midfield + self.attack
    }
}

pub struct StrengthModel;

impl StrengthModel {
    /// Rolls a fresh mood for every player around the team's morale.
    pub fn assign_moods<R: RandomSource>(team: &Team, rng: &mut R) -> Team {
        let morale = team.morale as i32;

        let players = team
            .players
            .iter()
            .map(|player| {
                let mood = rng.int_in(morale - MOOD_SPREAD, morale + MOOD_SPREAD);
                player.with_mood(mood as i16)
            })
            .collect();

        team.with_players(players)
    }

    /// Small random strength drift applied once per season.
    pub fn jitter<R: RandomSource>(team: &Team, rng: &mut R) -> Team {
        let players = team
            .players
            .iter()
            .map(|player| {
                let delta = rng.int_in(-STRENGTH_JITTER, STRENGTH_JITTER);
                player.with_strength_delta(delta as i16)
            })
            .collect();

        team.with_players(players)
    }
}
