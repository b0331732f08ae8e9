use crate::club::{Player, PlayerFieldPositionGroup, TeamStrength};
use crate::error::MatchError;
use crate::r#match::MatchSide;
use serde::{Deserialize, Serialize};

pub const SQUAD_STARTERS: usize = 11;
pub const SQUAD_MAX_SUBSTITUTES: usize = 7;

/// One team's projection for a single match: starters, bench and live score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchTeam {
    pub team_id: u32,
    pub team_name: String,
    pub side: MatchSide,
    pub starters: Vec<Player>,
    pub substitutes: Vec<Player>,
    pub goals: u8,
    pub substituted: Vec<u32>,
}

impl MatchTeam {
    pub fn new(
        team_id: u32,
        team_name: String,
        side: MatchSide,
        starters: Vec<Player>,
        substitutes: Vec<Player>,
    ) -> Self {
        MatchTeam {
            team_id,
            team_name,
            side,
            starters,
            substitutes,
            goals: 0,
            substituted: Vec::new(),
        }
    }

    pub fn strength(&self) -> TeamStrength {
        TeamStrength::from_players(&self.starters)
    }

    pub fn starters_in(&self, group: PlayerFieldPositionGroup) -> Vec<&Player> {
        self.starters.iter().filter(|p| p.position == group).collect()
    }

    /// One starter off, one substitute on; nothing changes when either side is invalid.
    pub fn substitute(&mut self, out_id: u32, in_id: u32) -> Result<(), MatchError> {
        let out_index = self
            .starters
            .iter()
            .position(|p| p.id == out_id)
            .ok_or(MatchError::PlayerNotInSquad(out_id))?;

        let in_index = self
            .substitutes
            .iter()
            .position(|p| p.id == in_id)
            .ok_or(MatchError::SubstituteNotOnBench(in_id))?;

        let incoming = self.substitutes.remove(in_index);
        let outgoing = std::mem::replace(&mut self.starters[out_index], incoming);

        self.substituted.push(outgoing.id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: u32, position: PlayerFieldPositionGroup) -> Player {
        Player::builder()
            .id(id)
            .name(format!("Player {}", id))
            .position(position)
            .strength(50)
            .build()
            .unwrap()
    }

    fn match_team() -> MatchTeam {
        let starters = (1..=11)
            .map(|id| player(id, PlayerFieldPositionGroup::Midfielder))
            .collect();
        let substitutes = vec![
            player(12, PlayerFieldPositionGroup::Forward),
            player(13, PlayerFieldPositionGroup::Defender),
        ];

        MatchTeam::new(1, "Bench FC".to_string(), MatchSide::Home, starters, substitutes)
    }

    #[test]
    fn substitution_keeps_eleven_starters() {
        let mut team = match_team();

        team.substitute(4, 12).unwrap();

        assert_eq!(team.starters.len(), 11);
        assert!(team.starters.iter().any(|p| p.id == 12));
        assert!(!team.starters.iter().any(|p| p.id == 4));
        assert_eq!(team.substitutes.len(), 1);
        assert_eq!(team.substituted, vec![4]);
    }

    #[test]
    fn substituted_player_cannot_come_back() {
        let mut team = match_team();
        team.substitute(4, 12).unwrap();

        assert_eq!(team.substitute(12, 4), Err(MatchError::SubstituteNotOnBench(4)));
    }

    #[test]
    fn invalid_substitution_changes_nothing() {
        let mut team = match_team();
        let before = team.clone();

        assert_eq!(team.substitute(99, 12), Err(MatchError::PlayerNotInSquad(99)));
        assert_eq!(team.substitute(3, 99), Err(MatchError::SubstituteNotOnBench(99)));
        assert_eq!(team, before);
    }
}
