use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const DEFAULT_GROUP_SIZE: usize = 4;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum ChampionshipPhase {
    /// Everybody plays everybody home and away.
    League,
    /// Table split into seeded groups, each with its own round robin.
    Groups,
}

impl FromStr for ChampionshipPhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "phase1" => Ok(ChampionshipPhase::League),
            "phase2" => Ok(ChampionshipPhase::Groups),
            other => Err(format!("unknown championship phase '{}'", other)),
        }
    }
}

impl Display for ChampionshipPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ChampionshipPhase::League => write!(f, "phase1"),
            ChampionshipPhase::Groups => write!(f, "phase2"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionSettings {
    /// Championship one level below.
    pub linked_championship_id: u32,
    pub swap_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionshipSettings {
    pub id: u32,
    pub name: String,
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_group_size")]
    pub group_size: usize,
    #[serde(default)]
    pub promotion: Option<PromotionSettings>,
}

fn default_format() -> String {
    ChampionshipPhase::League.to_string()
}

fn default_group_size() -> usize {
    DEFAULT_GROUP_SIZE
}

impl ChampionshipSettings {
    pub fn new(id: u32, name: String) -> Self {
        ChampionshipSettings {
            id,
            name,
            format: default_format(),
            group_size: DEFAULT_GROUP_SIZE,
            promotion: None,
        }
    }

    pub fn with_format(mut self, format: &str) -> Self {
        self.format = format.to_string();
        self
    }

    pub fn with_promotion(mut self, linked_championship_id: u32, swap_count: usize) -> Self {
        self.promotion = Some(PromotionSettings {
            linked_championship_id,
            swap_count,
        });
        self
    }

    /// Phases in play order. Unknown entries are skipped; an empty format
    /// means a single league phase.
    pub fn phases(&self) -> Vec<ChampionshipPhase> {
        let phases: Vec<ChampionshipPhase> = self
            .format
            .split(';')
            .filter(|part| !part.trim().is_empty())
            .filter_map(|part| match part.parse() {
                Ok(phase) => Some(phase),
                Err(error) => {
                    warn!("championship {}: {}", self.id, error);
                    None
                }
            })
            .collect();

        if phases.is_empty() {
            vec![ChampionshipPhase::League]
        } else {
            phases
        }
    }
}
