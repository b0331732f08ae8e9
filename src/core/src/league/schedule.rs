use crate::error::ScheduleError;
use crate::r#match::Score;
use crate::utils::RandomSource;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonMatch {
    pub id: String,
    pub round: u32,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub is_played: bool,
    pub score: Option<Score>,
}

impl SeasonMatch {
    pub fn new(id: String, round: u32, home_team_id: u32, away_team_id: u32) -> Self {
        SeasonMatch {
            id,
            round,
            home_team_id,
            away_team_id,
            is_played: false,
            score: None,
        }
    }

    pub fn record(&mut self, score: Score) {
        self.is_played = true;
        self.score = Some(score);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRound {
    pub round: u32,
    pub matches: Vec<SeasonMatch>,
    /// Teams resting this round when the pool is odd.
    #[serde(default)]
    pub byes: Vec<u32>,
}

impl SeasonRound {
    pub fn is_played(&self) -> bool {
        self.matches.iter().all(|m| m.is_played)
    }
}

pub struct ScheduleGenerator;

impl ScheduleGenerator {
    /// Double round robin with the circle method.
    ///
    /// `2N - 2` rounds for an even pool; an odd pool gets a bye slot and
    /// `2N` rounds. The second half replays the first with home and away
    /// reversed.
    pub fn generate<R: RandomSource>(
        prefix: &str,
        team_ids: &[u32],
        rng: &mut R,
    ) -> Result<Vec<SeasonRound>, ScheduleError> {
        if team_ids.len() < 2 {
            return Err(ScheduleError::NotEnoughTeams(team_ids.len()));
        }

        let mut seen = HashSet::with_capacity(team_ids.len());
        if let Some(duplicate) = team_ids.iter().find(|id| !seen.insert(**id)) {
            return Err(ScheduleError::DuplicateTeam(*duplicate));
        }

        let mut order = team_ids.to_vec();
        rng.shuffle(&mut order);

        let mut slots: Vec<Option<u32>> = order.into_iter().map(Some).collect();
        if slots.len() % 2 == 1 {
            slots.push(None);
        }

        let slot_count = slots.len();
        let half = slot_count - 1;

        let mut rounds = Vec::with_capacity(half * 2);

        for idx in 0..half {
            let round = idx as u32 + 1;
            let mut matches = Vec::with_capacity(slot_count / 2);
            let mut byes = Vec::new();

            for i in 0..slot_count / 2 {
                match (slots[i], slots[slot_count - 1 - i]) {
                    (Some(first), Some(second)) => {
                        // Fixed slot alternates home and away
                        let (home, away) = if i == 0 && idx % 2 == 1 {
                            (second, first)
                        } else {
                            (first, second)
                        };

                        matches.push(SeasonMatch::new(
                            Self::match_id(prefix, round, home, away),
                            round,
                            home,
                            away,
                        ));
                    }
                    (Some(team_id), None) | (None, Some(team_id)) => byes.push(team_id),
                    (None, None) => {}
                }
            }

            rounds.push(SeasonRound {
                round,
                matches,
                byes,
            });

            if let Some(last) = slots.pop() {
                slots.insert(1, last);
            }
        }

        let second_half: Vec<SeasonRound> = rounds
            .iter()
            .map(|first| {
                let round = first.round + half as u32;

                SeasonRound {
                    round,
                    matches: first
                        .matches
                        .iter()
                        .map(|m| {
                            SeasonMatch::new(
                                Self::match_id(prefix, round, m.away_team_id, m.home_team_id),
                                round,
                                m.away_team_id,
                                m.home_team_id,
                            )
                        })
                        .collect(),
                    byes: first.byes.clone(),
                }
            })
            .collect();

        rounds.extend(second_half);
        rounds.sort_by_key(|r| r.round);

        debug!(
            "calendar {}: {} teams, {} rounds",
            prefix,
            team_ids.len(),
            rounds.len()
        );

        Ok(rounds)
    }

    /// Folds several calendars into one, matching rounds by number.
    pub fn merge(calendars: Vec<Vec<SeasonRound>>) -> Vec<SeasonRound> {
        let mut merged: Vec<SeasonRound> = Vec::new();

        for calendar in calendars {
            for round in calendar {
                match merged.iter_mut().find(|r| r.round == round.round) {
                    Some(existing) => {
                        existing.matches.extend(round.matches);
                        existing.byes.extend(round.byes);
                    }
                    None => merged.push(round),
                }
            }
        }

        merged.sort_by_key(|r| r.round);
        merged
    }

    fn match_id(prefix: &str, round: u32, home: u32, away: u32) -> String {
        format!("{}-r{}-{}v{}", prefix, round, home, away)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::SeededRandom;
    use std::collections::HashMap;

    #[test]
    fn four_teams_play_six_rounds() {
        let mut rng = SeededRandom::new(3);
        let calendar = ScheduleGenerator::generate("c1", &[1, 2, 3, 4], &mut rng).unwrap();

        assert_eq!(calendar.len(), 6);
        assert!(calendar.iter().all(|r| r.matches.len() == 2));
        assert_eq!(calendar.iter().map(|r| r.matches.len()).sum::<usize>(), 12);

        let mut ordered: HashMap<(u32, u32), usize> = HashMap::new();
        for m in calendar.iter().flat_map(|r| &r.matches) {
            *ordered.entry((m.home_team_id, m.away_team_id)).or_default() += 1;
        }

        assert_eq!(ordered.len(), 12);
        assert!(ordered.values().all(|count| *count == 1));
    }

    #[test]
    fn nobody_plays_twice_in_a_round() {
        let mut rng = SeededRandom::new(11);
        let ids: Vec<u32> = (1..=8).collect();
        let calendar = ScheduleGenerator::generate("c1", &ids, &mut rng).unwrap();

        assert_eq!(calendar.len(), 14);

        for round in &calendar {
            let mut seen = HashSet::new();
            for m in &round.matches {
                assert_ne!(m.home_team_id, m.away_team_id);
                assert!(seen.insert(m.home_team_id));
                assert!(seen.insert(m.away_team_id));
            }
            assert!(round.byes.is_empty());
        }
    }

    #[test]
    fn odd_pool_rests_one_team_per_round() {
        let mut rng = SeededRandom::new(5);
        let calendar = ScheduleGenerator::generate("c1", &[1, 2, 3, 4, 5], &mut rng).unwrap();

        assert_eq!(calendar.len(), 10);

        let mut rests: HashMap<u32, usize> = HashMap::new();
        for round in &calendar {
            assert_eq!(round.matches.len(), 2);
            assert_eq!(round.byes.len(), 1);
            *rests.entry(round.byes[0]).or_default() += 1;
        }

        assert_eq!(rests.len(), 5);
        assert!(rests.values().all(|count| *count == 2));
    }

    #[test]
    fn invalid_pools_are_rejected() {
        let mut rng = SeededRandom::new(1);

        assert_eq!(
            ScheduleGenerator::generate("c1", &[7], &mut rng).err(),
            Some(ScheduleError::NotEnoughTeams(1))
        );
        assert_eq!(
            ScheduleGenerator::generate("c1", &[7, 8, 7], &mut rng).err(),
            Some(ScheduleError::DuplicateTeam(7))
        );
    }

    #[test]
    fn merge_joins_rounds_by_number() {
        let mut rng = SeededRandom::new(2);
        let a = ScheduleGenerator::generate("a", &[1, 2, 3, 4], &mut rng).unwrap();
        let b = ScheduleGenerator::generate("b", &[5, 6, 7, 8], &mut rng).unwrap();

        let merged = ScheduleGenerator::merge(vec![a, b]);

        assert_eq!(merged.len(), 6);
        assert!(merged.iter().all(|r| r.matches.len() == 4));
    }
}
