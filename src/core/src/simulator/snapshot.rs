use crate::club::{Team, TeamCollection};
use crate::league::Championship;
use crate::r#match::Formation;
use crate::simulator::{SeasonData, SeasonStatistics};
use serde::{Deserialize, Serialize};

/// Plain data copy of a season: rosters, standings, calendars and counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonSnapshot {
    pub year: i32,
    pub round: u32,
    pub human_team_id: Option<u32>,
    #[serde(default)]
    pub formation: Formation,
    pub teams: Vec<Team>,
    pub championships: Vec<Championship>,
    #[serde(default)]
    pub statistics: SeasonStatistics,
}

impl SeasonData {
    pub fn snapshot(&self) -> SeasonSnapshot {
        SeasonSnapshot {
            year: self.year,
            round: self.round,
            human_team_id: self.human_team_id,
            formation: self.formation,
            teams: self.teams.teams.clone(),
            championships: self.championships.clone(),
            statistics: self.statistics.clone(),
        }
    }

    pub fn restore(snapshot: SeasonSnapshot) -> SeasonData {
        SeasonData::new(
            TeamCollection::new(snapshot.teams),
            snapshot.championships,
            snapshot.human_team_id,
        )
        .with_year(snapshot.year)
        .with_formation(snapshot.formation)
        .with_round(snapshot.round)
        .with_statistics(snapshot.statistics)
    }

    fn with_round(mut self, round: u32) -> Self {
        self.round = round;
        self
    }

    fn with_statistics(mut self, statistics: SeasonStatistics) -> Self {
        self.statistics = statistics;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{Player, PlayerFieldPositionGroup};
    use crate::league::ChampionshipSettings;
    use crate::utils::SeededRandom;

    fn team(id: u32) -> Team {
        let players = PlayerFieldPositionGroup::ALL
            .iter()
            .flat_map(|position| std::iter::repeat_n(*position, 3))
            .enumerate()
            .map(|(idx, position)| {
                Player::builder()
                    .id(id * 100 + idx as u32)
                    .name(format!("Player {}", id * 100 + idx as u32))
                    .position(position)
                    .strength(50)
                    .build()
                    .unwrap()
            })
            .collect();

        Team::builder()
            .id(id)
            .name(format!("Team {}", id))
            .players(players)
            .build()
            .unwrap()
    }

    #[test]
    fn snapshot_survives_json() {
        let teams = TeamCollection::new((1..=4).map(team).collect());
        let championships = vec![Championship::new(
            ChampionshipSettings::new(1, "League".to_string()),
            vec![1, 2, 3, 4],
        )];
        let mut data = SeasonData::new(teams, championships, Some(2)).with_year(2030);
        let mut rng = SeededRandom::new(8);

        data.start_season(&mut rng).unwrap();
        data.play_round(&mut rng).unwrap();
        data.play_round(&mut rng).unwrap();

        let json = serde_json::to_string(&data.snapshot()).unwrap();
        let restored = SeasonData::restore(serde_json::from_str(&json).unwrap());

        assert_eq!(restored, data);
        assert_eq!(restored.round, 2);
        assert_eq!(restored.championships[0].round, 2);
    }
}
