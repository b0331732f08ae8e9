use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum PlayerFieldPositionGroup {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DF")]
    Defender,
    #[serde(rename = "MF")]
    Midfielder,
    #[serde(rename = "FW")]
    Forward,
}

impl PlayerFieldPositionGroup {
    pub const ALL: [PlayerFieldPositionGroup; 4] = [
        PlayerFieldPositionGroup::Goalkeeper,
        PlayerFieldPositionGroup::Defender,
        PlayerFieldPositionGroup::Midfielder,
        PlayerFieldPositionGroup::Forward,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PlayerFieldPositionGroup::Goalkeeper => "GK",
            PlayerFieldPositionGroup::Defender => "DF",
            PlayerFieldPositionGroup::Midfielder => "MF",
            PlayerFieldPositionGroup::Forward => "FW",
        }
    }

    /// Sort key used to order a lineup from the goal outwards.
    pub fn lineup_order(&self) -> u8 {
        match self {
            PlayerFieldPositionGroup::Goalkeeper => 0,
            PlayerFieldPositionGroup::Defender => 1,
            PlayerFieldPositionGroup::Midfielder => 2,
            PlayerFieldPositionGroup::Forward => 3,
        }
    }
}

/// Lineup order for a raw roster position code; unknown codes sort with goalkeepers.
pub fn lineup_order(code: &str) -> u8 {
    PlayerFieldPositionGroup::from_str(code)
        .map(|group| group.lineup_order())
        .unwrap_or(0)
}

impl FromStr for PlayerFieldPositionGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GK" => Ok(PlayerFieldPositionGroup::Goalkeeper),
            "DF" => Ok(PlayerFieldPositionGroup::Defender),
            "MF" => Ok(PlayerFieldPositionGroup::Midfielder),
            "FW" => Ok(PlayerFieldPositionGroup::Forward),
            other => Err(format!("unknown position code: {}", other)),
        }
    }
}

impl Display for PlayerFieldPositionGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lineup_order_follows_the_field() {
        assert_eq!(lineup_order("GK"), 0);
        assert_eq!(lineup_order("DF"), 1);
        assert_eq!(lineup_order("MF"), 2);
        assert_eq!(lineup_order("FW"), 3);
        assert_eq!(lineup_order("XX"), 0);
    }

    #[test]
    fn codes_parse_case_insensitively() {
        assert_eq!(
            PlayerFieldPositionGroup::from_str(" fw "),
            Ok(PlayerFieldPositionGroup::Forward)
        );
        assert!(PlayerFieldPositionGroup::from_str("ST").is_err());
    }
}
