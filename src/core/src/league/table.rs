use crate::r#match::{MatchOutcome, MatchResult};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStanding {
    pub team_id: u32,
    pub played: u16,
    pub wins: u16,
    pub draws: u16,
    pub losses: u16,
    pub goals_for: u16,
    pub goals_against: u16,
    pub goal_difference: i32,
    pub points: u16,
}

impl TableStanding {
    pub fn new(team_id: u32) -> Self {
        TableStanding {
            team_id,
            ..Default::default()
        }
    }

    fn record(&mut self, scored: u8, conceded: u8) {
        self.played += 1;
        self.goals_for += scored as u16;
        self.goals_against += conceded as u16;

        let outcome = MatchOutcome::from_goals(scored, conceded);
        match outcome {
            MatchOutcome::Win => self.wins += 1,
            MatchOutcome::Draw => self.draws += 1,
            MatchOutcome::Loss => self.losses += 1,
        }

        self.points += outcome.points() as u16;
        self.goal_difference = self.goals_for as i32 - self.goals_against as i32;
    }

    /// Points desc, goal difference desc, goals for desc, then team id.
    pub fn ranking(&self, other: &TableStanding) -> Ordering {
        other
            .points
            .cmp(&self.points)
            .then_with(|| other.goal_difference.cmp(&self.goal_difference))
            .then_with(|| other.goals_for.cmp(&self.goals_for))
            .then_with(|| self.team_id.cmp(&other.team_id))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueTable {
    pub rows: Vec<TableStanding>,
}

impl LeagueTable {
    pub fn new(team_ids: &[u32]) -> Self {
        let mut table = LeagueTable {
            rows: team_ids.iter().map(|id| TableStanding::new(*id)).collect(),
        };

        table.sort();
        table
    }

    /// Pure aggregation: `previous` folded with `results`.
    pub fn aggregate(previous: &LeagueTable, results: &[MatchResult]) -> LeagueTable {
        let mut table = previous.clone();
        table.update(results);
        table
    }

    pub fn update(&mut self, results: &[MatchResult]) {
        for result in results {
            self.row_mut(result.home_team_id)
                .record(result.score.home, result.score.away);
            self.row_mut(result.away_team_id)
                .record(result.score.away, result.score.home);
        }

        self.sort();
    }

    fn row_mut(&mut self, team_id: u32) -> &mut TableStanding {
        let index = match self.rows.iter().position(|r| r.team_id == team_id) {
            Some(index) => index,
            None => {
                self.rows.push(TableStanding::new(team_id));
                self.rows.len() - 1
            }
        };

        &mut self.rows[index]
    }

    pub fn sort(&mut self) {
        self.rows.sort_by(|a, b| a.ranking(b));
    }

    pub fn get(&self, team_id: u32) -> Option<&TableStanding> {
        self.rows.iter().find(|r| r.team_id == team_id)
    }

    /// One-based table position.
    pub fn position_of(&self, team_id: u32) -> Option<usize> {
        self.rows
            .iter()
            .position(|r| r.team_id == team_id)
            .map(|idx| idx + 1)
    }

    pub fn team_ids(&self) -> Vec<u32> {
        self.rows.iter().map(|r| r.team_id).collect()
    }

    pub fn leader(&self) -> Option<&TableStanding> {
        self.rows.first()
    }

    /// Same teams, every record back to zero.
    pub fn reset(&self) -> LeagueTable {
        LeagueTable::new(&self.team_ids())
    }
}
