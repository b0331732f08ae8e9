use crate::club::player::builder::PlayerBuilder;
use crate::club::PlayerFieldPositionGroup;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

pub const PLAYER_MIN_STRENGTH: u8 = 1;
pub const PLAYER_MAX_STRENGTH: u8 = 100;
pub const PLAYER_MAX_MOOD: u8 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub position: PlayerFieldPositionGroup,
    pub strength: u8,
    pub mood: u8,
}

impl Player {
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    pub fn lineup_order(&self) -> u8 {
        self.position.lineup_order()
    }

    /// Copy of the player with strength moved by `delta`, clamped to the valid range.
    pub fn with_strength_delta(&self, delta: i16) -> Player {
        let strength = (self.strength as i16 + delta)
            .clamp(PLAYER_MIN_STRENGTH as i16, PLAYER_MAX_STRENGTH as i16);

        Player {
            strength: strength as u8,
            ..self.clone()
        }
    }

    pub fn with_mood(&self, mood: i16) -> Player {
        Player {
            mood: mood.clamp(0, PLAYER_MAX_MOOD as i16) as u8,
            ..self.clone()
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({}, {})", self.name, self.position, self.strength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn striker(strength: u8) -> Player {
        Player::builder()
            .id(9)
            .name("Striker".to_string())
            .position(PlayerFieldPositionGroup::Forward)
            .strength(strength)
            .build()
            .unwrap()
    }

    #[test]
    fn strength_delta_is_clamped() {
        assert_eq!(striker(100).with_strength_delta(1).strength, 100);
        assert_eq!(striker(1).with_strength_delta(-1).strength, 1);
        assert_eq!(striker(50).with_strength_delta(-3).strength, 47);
    }

    #[test]
    fn strength_delta_keeps_identity() {
        let player = striker(50);
        let updated = player.with_strength_delta(2);

        assert_eq!(updated.id, player.id);
        assert_eq!(updated.name, player.name);
        assert_eq!(player.strength, 50);
    }

    #[test]
    fn mood_is_clamped() {
        assert_eq!(striker(50).with_mood(130).mood, 100);
        assert_eq!(striker(50).with_mood(-5).mood, 0);
    }
}
