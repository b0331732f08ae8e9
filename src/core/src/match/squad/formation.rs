use crate::club::PlayerFieldPositionGroup;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub enum Formation {
    #[default]
    F442,
    F433,
    F352,
    F451,
    F532,
}

impl Formation {
    /// Starters per outfield line; one goalkeeper always plays.
    pub fn lines(&self) -> (usize, usize, usize) {
        match self {
            Formation::F442 => (4, 4, 2),
            Formation::F433 => (4, 3, 3),
            Formation::F352 => (3, 5, 2),
            Formation::F451 => (4, 5, 1),
            Formation::F532 => (5, 3, 2),
        }
    }

    pub fn required(&self, group: PlayerFieldPositionGroup) -> usize {
        let (defenders, midfielders, forwards) = self.lines();

        match group {
            PlayerFieldPositionGroup::Goalkeeper => 1,
            PlayerFieldPositionGroup::Defender => defenders,
            PlayerFieldPositionGroup::Midfielder => midfielders,
            PlayerFieldPositionGroup::Forward => forwards,
        }
    }
}

impl FromStr for Formation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "4-4-2" => Ok(Formation::F442),
            "4-3-3" => Ok(Formation::F433),
            "3-5-2" => Ok(Formation::F352),
            "4-5-1" => Ok(Formation::F451),
            "5-3-2" => Ok(Formation::F532),
            other => Err(format!("unsupported formation: {}", other)),
        }
    }
}

impl Display for Formation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (defenders, midfielders, forwards) = self.lines();
        write!(f, "{}-{}-{}", defenders, midfielders, forwards)
    }
}
