use crate::club::PlayerFieldPositionGroup;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum MatchSide {
    Home,
    Away,
}

impl MatchSide {
    pub fn opposite(&self) -> MatchSide {
        match self {
            MatchSide::Home => MatchSide::Away,
            MatchSide::Away => MatchSide::Home,
        }
    }
}

/// Field area holding the ball, seen from the side in possession.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum FieldZone {
    Defense,
    Midfield,
    Attack,
}

impl FieldZone {
    /// The same area seen from the other side.
    pub fn mirror(&self) -> FieldZone {
        match self {
            FieldZone::Defense => FieldZone::Attack,
            FieldZone::Midfield => FieldZone::Midfield,
            FieldZone::Attack => FieldZone::Defense,
        }
    }

    pub fn forward(&self) -> FieldZone {
        match self {
            FieldZone::Defense => FieldZone::Midfield,
            FieldZone::Midfield | FieldZone::Attack => FieldZone::Attack,
        }
    }

    pub fn backward(&self) -> FieldZone {
        match self {
            FieldZone::Attack => FieldZone::Midfield,
            FieldZone::Midfield | FieldZone::Defense => FieldZone::Defense,
        }
    }

    /// Position group that contests the ball in this zone.
    pub fn position_group(&self) -> PlayerFieldPositionGroup {
        match self {
            FieldZone::Defense => PlayerFieldPositionGroup::Goalkeeper,
            FieldZone::Midfield => PlayerFieldPositionGroup::Midfielder,
            FieldZone::Attack => PlayerFieldPositionGroup::Forward,
        }
    }

    fn index(&self) -> i8 {
        match self {
            FieldZone::Defense => 0,
            FieldZone::Midfield => 1,
            FieldZone::Attack => 2,
        }
    }

    /// Number of zone steps between two zones of the same reference frame.
    pub fn distance(&self, other: FieldZone) -> u8 {
        (self.index() - other.index()).unsigned_abs()
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Possession {
    pub side: MatchSide,
    pub zone: FieldZone,
}

impl Possession {
    pub fn kickoff(side: MatchSide) -> Self {
        Possession {
            side,
            zone: FieldZone::Midfield,
        }
    }

    pub fn moved_to(&self, zone: FieldZone) -> Self {
        Possession {
            side: self.side,
            zone,
        }
    }

    /// Ball lost: the opponent holds it where it is, seen from their half.
    pub fn turnover(&self) -> Self {
        Possession {
            side: self.side.opposite(),
            zone: self.zone.mirror(),
        }
    }

    /// Ball zone in the home side's reference frame.
    pub fn absolute_zone(&self) -> FieldZone {
        match self.side {
            MatchSide::Home => self.zone,
            MatchSide::Away => self.zone.mirror(),
        }
    }
}

impl Default for Possession {
    fn default() -> Self {
        Possession::kickoff(MatchSide::Home)
    }
}
