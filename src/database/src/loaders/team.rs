use serde::Deserialize;

const STATIC_TEAMS_JSON: &str = include_str!("../data/teams.json");

#[derive(Deserialize)]
pub struct TeamEntity {
    pub id: u32,
    pub name: String,
    pub short_name: String,
    pub abbreviation: String,
    pub colors: TeamColorsEntity,
    /// Baseline the generated roster is built around.
    pub strength: u8,
}

#[derive(Deserialize)]
pub struct TeamColorsEntity {
    pub primary: String,
    pub secondary: String,
    pub text: String,
}

pub struct TeamLoader;

impl TeamLoader {
    pub fn load() -> Result<Vec<TeamEntity>, serde_json::Error> {
        serde_json::from_str(STATIC_TEAMS_JSON)
    }
}
