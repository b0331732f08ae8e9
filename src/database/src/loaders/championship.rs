use football_core::ChampionshipSettings;
use serde::Deserialize;

const STATIC_CHAMPIONSHIPS_JSON: &str = include_str!("../data/championships.json");

#[derive(Deserialize)]
pub struct ChampionshipEntity {
    #[serde(flatten)]
    pub settings: ChampionshipSettings,
    pub teams: Vec<u32>,
}

pub struct ChampionshipLoader;

impl ChampionshipLoader {
    pub fn load() -> Result<Vec<ChampionshipEntity>, serde_json::Error> {
        serde_json::from_str(STATIC_CHAMPIONSHIPS_JSON)
    }
}
