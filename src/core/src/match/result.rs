use crate::r#match::MatchSide;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    pub fn from_goals(scored: u8, conceded: u8) -> Self {
        if scored > conceded {
            MatchOutcome::Win
        } else if scored < conceded {
            MatchOutcome::Loss
        } else {
            MatchOutcome::Draw
        }
    }

    pub fn points(&self) -> u8 {
        match self {
            MatchOutcome::Win => 3,
            MatchOutcome::Draw => 1,
            MatchOutcome::Loss => 0,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}

impl Score {
    pub fn new(home: u8, away: u8) -> Self {
        Score { home, away }
    }

    pub fn get(&self, side: MatchSide) -> u8 {
        match side {
            MatchSide::Home => self.home,
            MatchSide::Away => self.away,
        }
    }

    pub fn total(&self) -> u16 {
        self.home as u16 + self.away as u16
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub player_id: u32,
    pub scorer: String,
    pub side: MatchSide,
    pub minute: u8,
}

/// Frozen outcome of a finished match, consumed by standings and morale.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_id: String,
    pub round: u32,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub score: Score,
    pub scorers: Vec<Goal>,
}

impl MatchResult {
    pub fn new(match_id: String, round: u32, home_team_id: u32, away_team_id: u32, score: Score) -> Self {
        MatchResult {
            match_id,
            round,
            home_team_id,
            away_team_id,
            score,
            scorers: Vec::new(),
        }
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    /// `(scored, conceded)` from the point of view of `team_id`.
    pub fn goals_for(&self, team_id: u32) -> Option<(u8, u8)> {
        if self.home_team_id == team_id {
            Some((self.score.home, self.score.away))
        } else if self.away_team_id == team_id {
            Some((self.score.away, self.score.home))
        } else {
            None
        }
    }

    pub fn outcome_for(&self, team_id: u32) -> Option<MatchOutcome> {
        self.goals_for(team_id)
            .map(|(scored, conceded)| MatchOutcome::from_goals(scored, conceded))
    }
}
