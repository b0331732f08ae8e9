use crate::r#match::{MatchResult, MatchSide};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorerTally {
    pub player_id: u32,
    pub name: String,
    pub team_id: u32,
    pub goals: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonStatistics {
    pub matches_played: u32,
    pub total_goals: u32,
    pub scorers: Vec<ScorerTally>,
}

impl SeasonStatistics {
    pub fn record(&mut self, result: &MatchResult) {
        self.matches_played += 1;

        for goal in &result.scorers {
            let team_id = match goal.side {
                MatchSide::Home => result.home_team_id,
                MatchSide::Away => result.away_team_id,
            };

            match self
                .scorers
                .iter_mut()
                .find(|s| s.player_id == goal.player_id)
            {
                Some(tally) => tally.goals += 1,
                None => self.scorers.push(ScorerTally {
                    player_id: goal.player_id,
                    name: goal.scorer.clone(),
                    team_id,
                    goals: 1,
                }),
            }

            self.total_goals += 1;
        }
    }

    pub fn top_scorer(&self) -> Option<&ScorerTally> {
        self.scorers
            .iter()
            .min_by(|a, b| b.goals.cmp(&a.goals).then_with(|| a.player_id.cmp(&b.player_id)))
    }
}
