use crate::league::LeagueTable;
use crate::r#match::MatchResult;
use serde::{Deserialize, Serialize};

/// Named subset of a championship accumulating its own standings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTable {
    pub name: String,
    pub team_ids: Vec<u32>,
    pub table: LeagueTable,
}

impl GroupTable {
    pub fn new(name: String, team_ids: Vec<u32>) -> Self {
        let table = LeagueTable::new(&team_ids);

        GroupTable {
            name,
            team_ids,
            table,
        }
    }

    pub fn contains(&self, team_id: u32) -> bool {
        self.team_ids.contains(&team_id)
    }

    /// Matches with at least one side in this group.
    pub fn relevant(&self, results: &[MatchResult]) -> Vec<MatchResult> {
        results
            .iter()
            .filter(|r| self.contains(r.home_team_id) || self.contains(r.away_team_id))
            .cloned()
            .collect()
    }

    pub fn update(&mut self, results: &[MatchResult]) {
        let relevant = self.relevant(results);

        self.table.update(&relevant);
        self.table.rows.retain(|row| self.team_ids.contains(&row.team_id));
    }
}

pub struct GroupSplitter;

impl GroupSplitter {
    /// Snake seeding of a finished table into groups of `group_size`.
    ///
    /// With two groups the ranks go 1, 4, 5, 8 to group A and 2, 3, 6, 7 to
    /// group B. Every group starts from an empty record.
    pub fn split(table: &LeagueTable, group_size: usize) -> Vec<GroupTable> {
        let ranked = table.team_ids();
        if ranked.is_empty() {
            return Vec::new();
        }

        let group_size = group_size.max(2);
        let group_count = ranked.len().div_ceil(group_size).max(1);

        let mut members: Vec<Vec<u32>> = vec![Vec::new(); group_count];

        for (idx, team_id) in ranked.into_iter().enumerate() {
            let block = idx / group_count;
            let within = idx % group_count;

            let group = if block % 2 == 0 {
                within
            } else {
                group_count - 1 - within
            };

            members[group].push(team_id);
        }

        members
            .into_iter()
            .enumerate()
            .map(|(idx, team_ids)| GroupTable::new(Self::group_name(idx), team_ids))
            .collect()
    }

    fn group_name(index: usize) -> String {
        let letter = (b'A' + (index % 26) as u8) as char;
        letter.to_string()
    }
}
