use crate::r#match::{
    Goal, MatchResult, MatchSide, MatchState, MatchTeam, Possession, Score, StateManager,
    MATCH_FINAL_MINUTE,
};
use serde::{Deserialize, Serialize};

/// One fixture being played: both teams, the ball and the scoring record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub round: u32,
    pub home: MatchTeam,
    pub away: MatchTeam,
    pub possession: Possession,
    pub minute: u8,
    pub state: MatchState,
    pub last_scorer: Option<Goal>,
    pub scorers: Vec<Goal>,
    pub shot_attempts: u16,
}

impl Match {
    pub fn make(id: String, round: u32, mut home: MatchTeam, mut away: MatchTeam) -> Self {
        home.side = MatchSide::Home;
        away.side = MatchSide::Away;

        Match {
            id,
            round,
            home,
            away,
            possession: Possession::default(),
            minute: 0,
            state: MatchState::NotStarted,
            last_scorer: None,
            scorers: Vec::new(),
            shot_attempts: 0,
        }
    }

    pub fn team(&self, side: MatchSide) -> &MatchTeam {
        match side {
            MatchSide::Home => &self.home,
            MatchSide::Away => &self.away,
        }
    }

    pub fn team_mut(&mut self, side: MatchSide) -> &mut MatchTeam {
        match side {
            MatchSide::Home => &mut self.home,
            MatchSide::Away => &mut self.away,
        }
    }

    pub fn score(&self) -> Score {
        Score::new(self.home.goals, self.away.goals)
    }

    pub fn next_minute(&self) -> Option<u8> {
        StateManager::next_minute(self.state, self.minute)
    }

    pub fn is_finished(&self) -> bool {
        self.state == MatchState::Finished
    }

    /// Copy of the match stopped at the final whistle as it stands.
    pub fn finished(&self) -> Match {
        Match {
            minute: MATCH_FINAL_MINUTE,
            state: MatchState::Finished,
            ..self.clone()
        }
    }

    pub fn result(&self) -> Option<MatchResult> {
        if !self.is_finished() {
            return None;
        }

        Some(MatchResult {
            match_id: self.id.clone(),
            round: self.round,
            home_team_id: self.home.team_id,
            away_team_id: self.away.team_id,
            score: self.score(),
            scorers: self.scorers.clone(),
        })
    }
}
