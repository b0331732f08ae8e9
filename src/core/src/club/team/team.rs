use crate::club::team::builder::TeamBuilder;
use crate::club::Player;
use serde::{Deserialize, Serialize};

pub const TEAM_MAX_MORALE: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamColors {
    pub primary: String,
    pub secondary: String,
    pub text: String,
}

impl TeamColors {
    pub fn new(primary: &str, secondary: &str, text: &str) -> Self {
        TeamColors {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            text: text.to_string(),
        }
    }
}

/// A club's persistent roster pool, carried across rounds and seasons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub short_name: String,
    pub abbreviation: String,
    pub colors: TeamColors,
    pub players: Vec<Player>,
    pub morale: u8,
    pub initial_strength: u8,
}

impl Team {
    pub fn builder() -> TeamBuilder {
        TeamBuilder::new()
    }

    pub fn player(&self, player_id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// Mean mood of the roster, 0 for an empty roster.
    pub fn overall_mood(&self) -> u8 {
        if self.players.is_empty() {
            return 0;
        }

        let total: u32 = self.players.iter().map(|p| p.mood as u32).sum();
        (total / self.players.len() as u32) as u8
    }

    pub fn average_strength(&self) -> f32 {
        if self.players.is_empty() {
            return 0.0;
        }

        let total: u32 = self.players.iter().map(|p| p.strength as u32).sum();
        total as f32 / self.players.len() as f32
    }

    pub fn with_players(&self, players: Vec<Player>) -> Team {
        Team {
            players,
            ..self.clone()
        }
    }

    pub fn with_morale(&self, morale: i16) -> Team {
        Team {
            morale: morale.clamp(0, TEAM_MAX_MORALE as i16) as u8,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::PlayerFieldPositionGroup;

    fn player(id: u32, position: PlayerFieldPositionGroup, strength: u8, mood: u8) -> Player {
        Player::builder()
            .id(id)
            .name(format!("Player {}", id))
            .position(position)
            .strength(strength)
            .mood(mood)
            .build()
            .unwrap()
    }

    fn team(players: Vec<Player>) -> Team {
        Team::builder()
            .id(1)
            .name("Test Team".to_string())
            .players(players)
            .build()
            .unwrap()
    }

    #[test]
    fn overall_mood_is_the_mean() {
        let team = team(vec![
            player(1, PlayerFieldPositionGroup::Goalkeeper, 50, 40),
            player(2, PlayerFieldPositionGroup::Defender, 50, 60),
        ]);

        assert_eq!(team.overall_mood(), 50);
    }

    #[test]
    fn empty_roster_has_zero_mood_and_strength() {
        let team = team(Vec::new());

        assert_eq!(team.overall_mood(), 0);
        assert_eq!(team.average_strength(), 0.0);
    }

    #[test]
    fn morale_is_clamped() {
        let team = team(Vec::new());

        assert_eq!(team.with_morale(140).morale, 100);
        assert_eq!(team.with_morale(-10).morale, 0);
    }
}
