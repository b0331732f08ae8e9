use crate::loaders::PeopleNamesEntity;
use football_core::{
    Player, PlayerFieldPositionGroup, RandomSource, PLAYER_MAX_STRENGTH, PLAYER_MIN_STRENGTH,
};

const STRENGTH_SPREAD: i32 = 8;
const DEFAULT_MOOD: u8 = 50;

/// Roster shape: 2 goalkeepers, 6 defenders, 6 midfielders, 4 forwards.
pub const ROSTER_LAYOUT: [(PlayerFieldPositionGroup, usize); 4] = [
    (PlayerFieldPositionGroup::Goalkeeper, 2),
    (PlayerFieldPositionGroup::Defender, 6),
    (PlayerFieldPositionGroup::Midfielder, 6),
    (PlayerFieldPositionGroup::Forward, 4),
];

pub struct PlayerGenerator {
    first_names: Vec<String>,
    last_names: Vec<String>,
    next_id: u32,
}

impl PlayerGenerator {
    pub fn with_people_names(people_names: &PeopleNamesEntity) -> Self {
        PlayerGenerator {
            first_names: people_names.first_names.clone(),
            last_names: people_names.last_names.clone(),
            next_id: 1,
        }
    }

    pub fn generate<R: RandomSource>(
        &mut self,
        position: PlayerFieldPositionGroup,
        baseline: u8,
        rng: &mut R,
    ) -> Result<Player, String> {
        let strength = (baseline as i32 + rng.int_in(-STRENGTH_SPREAD, STRENGTH_SPREAD))
            .clamp(PLAYER_MIN_STRENGTH as i32, PLAYER_MAX_STRENGTH as i32);

        let id = self.next_id;
        self.next_id += 1;

        Player::builder()
            .id(id)
            .name(self.generate_name(id, rng))
            .position(position)
            .strength(strength as u8)
            .mood(DEFAULT_MOOD)
            .build()
    }

    pub fn generate_roster<R: RandomSource>(
        &mut self,
        baseline: u8,
        rng: &mut R,
    ) -> Result<Vec<Player>, String> {
        let mut players = Vec::with_capacity(ROSTER_LAYOUT.iter().map(|(_, count)| count).sum());

        for (position, count) in ROSTER_LAYOUT {
            for _ in 0..count {
                players.push(self.generate(position, baseline, rng)?);
            }
        }

        Ok(players)
    }

    fn generate_name<R: RandomSource>(&self, id: u32, rng: &mut R) -> String {
        match (rng.pick(&self.first_names), rng.pick(&self.last_names)) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            _ => format!("Player {}", id),
        }
    }
}
