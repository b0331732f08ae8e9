use crate::club::{Player, PlayerFieldPositionGroup, PLAYER_MAX_MOOD, PLAYER_MAX_STRENGTH, PLAYER_MIN_STRENGTH};

const DEFAULT_MOOD: u8 = 50;

#[derive(Default)]
pub struct PlayerBuilder {
    id: Option<u32>,
    name: Option<String>,
    position: Option<PlayerFieldPositionGroup>,
    strength: Option<u8>,
    mood: Option<u8>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn position(mut self, position: PlayerFieldPositionGroup) -> Self {
        self.position = Some(position);
        self
    }

    pub fn strength(mut self, strength: u8) -> Self {
        self.strength = Some(strength);
        self
    }

    pub fn mood(mut self, mood: u8) -> Self {
        self.mood = Some(mood);
        self
    }

    pub fn build(self) -> Result<Player, String> {
        let strength = self.strength.ok_or("strength is required")?;
        if !(PLAYER_MIN_STRENGTH..=PLAYER_MAX_STRENGTH).contains(&strength) {
            return Err(format!("strength {} is out of range", strength));
        }

        Ok(Player {
            id: self.id.ok_or("id is required")?,
            name: self.name.ok_or("name is required")?,
            position: self.position.ok_or("position is required")?,
            strength,
            mood: self.mood.unwrap_or(DEFAULT_MOOD).min(PLAYER_MAX_MOOD),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_identity() {
        let result = PlayerBuilder::new()
            .position(PlayerFieldPositionGroup::Defender)
            .strength(40)
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn build_rejects_zero_strength() {
        let result = PlayerBuilder::new()
            .id(1)
            .name("Zero".to_string())
            .position(PlayerFieldPositionGroup::Defender)
            .strength(0)
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn build_defaults_mood() {
        let player = PlayerBuilder::new()
            .id(1)
            .name("Default".to_string())
            .position(PlayerFieldPositionGroup::Midfielder)
            .strength(60)
            .build()
            .unwrap();

        assert_eq!(player.mood, DEFAULT_MOOD);
    }
}
