use crate::r#match::MatchResult;

/// Results of one championship round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueResult {
    pub championship_id: u32,
    pub round: u32,
    pub match_results: Vec<MatchResult>,
}

impl LeagueResult {
    pub fn new(championship_id: u32, round: u32, match_results: Vec<MatchResult>) -> Self {
        LeagueResult {
            championship_id,
            round,
            match_results,
        }
    }

    pub fn total_goals(&self) -> u32 {
        self.match_results
            .iter()
            .map(|r| r.score.total() as u32)
            .sum()
    }

    pub fn result_for(&self, team_id: u32) -> Option<&MatchResult> {
        self.match_results.iter().find(|r| r.involves(team_id))
    }
}
