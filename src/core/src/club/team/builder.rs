use crate::club::{Player, Team, TeamColors};

const DEFAULT_MORALE: u8 = 50;

#[derive(Default)]
pub struct TeamBuilder {
    id: Option<u32>,
    name: Option<String>,
    short_name: Option<String>,
    abbreviation: Option<String>,
    colors: Option<TeamColors>,
    players: Option<Vec<Player>>,
    morale: Option<u8>,
}

impl TeamBuilder {
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

    pub fn short_name(mut self, short_name: String) -> Self {
        self.short_name = Some(short_name);
        self
    }

    pub fn abbreviation(mut self, abbreviation: String) -> Self {
        self.abbreviation = Some(abbreviation);
        self
    }

    pub fn colors(mut self, colors: TeamColors) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn players(mut self, players: Vec<Player>) -> Self {
        self.players = Some(players);
        self
    }

    pub fn morale(mut self, morale: u8) -> Self {
        self.morale = Some(morale);
        self
    }

    pub fn build(self) -> Result<Team, String> {
        let name = self.name.ok_or("name is required")?;
        let players = self.players.ok_or("players is required")?;

        let initial_strength = if players.is_empty() {
            0
        } else {
            let total: u32 = players.iter().map(|p| p.strength as u32).sum();
            (total / players.len() as u32) as u8
        };

        let abbreviation = self
            .abbreviation
            .unwrap_or_else(|| name.chars().take(3).collect::<String>().to_uppercase());

        Ok(Team {
            id: self.id.ok_or("id is required")?,
            short_name: self.short_name.unwrap_or_else(|| name.clone()),
            abbreviation,
            name,
            colors: self
                .colors
                .unwrap_or_else(|| TeamColors::new("#ffffff", "#000000", "#000000")),
            players,
            morale: self.morale.unwrap_or(DEFAULT_MORALE).min(100),
            initial_strength,
        })
    }
}
