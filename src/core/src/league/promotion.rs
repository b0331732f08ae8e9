use crate::club::{Team, TeamCollection};
use crate::league::Championship;
use crate::utils::RandomSource;
use log::{info, warn};

const MAX_REDRAWS: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceRow {
    pub team_id: u32,
    pub points: u32,
    pub average_strength: f32,
}

/// Off-screen double round robin ranking teams of two linked championships.
pub struct PerformanceTournament;

impl PerformanceTournament {
    pub fn rank<R: RandomSource>(teams: &[&Team], rng: &mut R) -> Vec<PerformanceRow> {
        let mut rows: Vec<PerformanceRow> = teams
            .iter()
            .map(|team| PerformanceRow {
                team_id: team.id,
                points: 0,
                average_strength: team.average_strength(),
            })
            .collect();

        for home in 0..rows.len() {
            for away in 0..rows.len() {
                if home == away {
                    continue;
                }

                let home_won = Self::play(rows[home].average_strength, rows[away].average_strength, rng);
                let winner = if home_won { home } else { away };

                rows[winner].points += 3;
            }
        }

        rows.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then_with(|| b.average_strength.total_cmp(&a.average_strength))
                .then_with(|| a.team_id.cmp(&b.team_id))
        });

        rows
    }

    /// Draws on each side's average strength until they differ.
    fn play<R: RandomSource>(home_strength: f32, away_strength: f32, rng: &mut R) -> bool {
        let home_bound = (home_strength.round() as i32).max(1);
        let away_bound = (away_strength.round() as i32).max(1);

        for _ in 0..MAX_REDRAWS {
            let home = rng.int_in(1, home_bound);
            let away = rng.int_in(1, away_bound);

            if home != away {
                return home > away;
            }
        }

        rng.coin()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromotionOutcome {
    pub relegated: Vec<u32>,
    pub promoted: Vec<u32>,
}

pub struct PromotionService;

impl PromotionService {
    /// Swaps the weakest teams of `upper` with the strongest of `lower`.
    ///
    /// `upper_ranking` and `lower_ranking` are the final rankings taken
    /// before any championship changed its teams this summer. Only teams
    /// found there can move, so nobody moves twice down a chain. AI teams
    /// are ranked by a performance tournament. The human team only moves on
    /// its own final position: relegated from the bottom places of `upper`,
    /// promoted from the top places of `lower`.
    pub fn apply<R: RandomSource>(
        upper: &mut Championship,
        lower: &mut Championship,
        upper_ranking: &[u32],
        lower_ranking: &[u32],
        teams: &TeamCollection,
        human_team_id: Option<u32>,
        rng: &mut R,
    ) -> PromotionOutcome {
        let Some(settings) = upper.settings.promotion.clone() else {
            return PromotionOutcome::default();
        };

        let swap_count = settings
            .swap_count
            .min(upper.team_ids.len())
            .min(lower.team_ids.len());

        if swap_count == 0 {
            return PromotionOutcome::default();
        }

        let is_human = |id: u32| human_team_id == Some(id);

        let contenders: Vec<&Team> = upper
            .team_ids
            .iter()
            .chain(lower.team_ids.iter())
            .filter(|id| !is_human(**id))
            .filter_map(|id| {
                let team = teams.by_id(*id);
                if team.is_none() {
                    warn!("team {} missing from the performance tournament", id);
                }
                team
            })
            .collect();

        let ranking = PerformanceTournament::rank(&contenders, rng);

        let upper_ranked: Vec<u32> = ranking
            .iter()
            .map(|row| row.team_id)
            .filter(|id| upper.contains(*id) && upper_ranking.contains(id))
            .collect();
        let lower_ranked: Vec<u32> = ranking
            .iter()
            .map(|row| row.team_id)
            .filter(|id| lower.contains(*id) && lower_ranking.contains(id))
            .collect();

        let human_relegated = human_team_id
            .filter(|id| upper.contains(*id))
            .and_then(|id| Self::position_in(upper_ranking, id))
            .is_some_and(|position| position > upper_ranking.len().saturating_sub(swap_count));

        let human_promoted = human_team_id
            .filter(|id| lower.contains(*id))
            .and_then(|id| Self::position_in(lower_ranking, id))
            .is_some_and(|position| position <= swap_count);

        let worst_upper = |count: usize| -> Vec<u32> {
            upper_ranked.iter().rev().take(count).copied().collect()
        };
        let best_lower = |count: usize| -> Vec<u32> {
            lower_ranked.iter().take(count).copied().collect()
        };

        let (mut relegated, mut promoted) = match human_team_id {
            Some(human) if human_relegated => {
                let mut relegated = vec![human];
                relegated.extend(worst_upper(swap_count - 1));
                (relegated, best_lower(swap_count))
            }
            Some(human) if human_promoted => {
                let mut promoted = vec![human];
                promoted.extend(best_lower(swap_count - 1));
                (worst_upper(swap_count), promoted)
            }
            _ => (worst_upper(swap_count), best_lower(swap_count)),
        };

        // Both championships keep their size
        let moved = relegated.len().min(promoted.len());
        relegated.truncate(moved);
        promoted.truncate(moved);

        upper.replace_teams(&relegated, &promoted);
        lower.replace_teams(&promoted, &relegated);

        info!(
            "⬇️ relegated from {}: {:?}, ⬆️ promoted from {}: {:?}",
            upper.name(),
            relegated,
            lower.name(),
            promoted
        );

        PromotionOutcome {
            relegated,
            promoted,
        }
    }

    fn position_in(ranking: &[u32], team_id: u32) -> Option<usize> {
        ranking.iter().position(|id| *id == team_id).map(|idx| idx + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{Player, PlayerFieldPositionGroup};
    use crate::league::ChampionshipSettings;
    use crate::utils::SeededRandom;

    fn team(id: u32, strength: u8) -> Team {
        let players = (0..3)
            .map(|idx| {
                Player::builder()
                    .id(id * 10 + idx)
                    .name(format!("Player {}", id * 10 + idx))
                    .position(PlayerFieldPositionGroup::Midfielder)
                    .strength(strength)
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

    fn setup() -> (Championship, Championship, TeamCollection) {
        let upper = Championship::new(
            ChampionshipSettings::new(1, "First".to_string()).with_promotion(2, 2),
            vec![1, 2, 3, 4],
        );
        let lower = Championship::new(ChampionshipSettings::new(2, "Second".to_string()), vec![5, 6, 7, 8]);
        let teams = TeamCollection::new((1..=8).map(|id| team(id, 10 * id as u8)).collect());

        (upper, lower, teams)
    }

    fn assert_sizes(upper: &Championship, lower: &Championship) {
        assert_eq!(upper.team_ids.len(), 4);
        assert_eq!(lower.team_ids.len(), 4);
        for id in &upper.team_ids {
            assert!(!lower.contains(*id));
        }
    }

    #[test]
    fn tournament_awards_three_points_per_game() {
        let teams: Vec<Team> = (1..=4).map(|id| team(id, 20 * id as u8)).collect();
        let refs: Vec<&Team> = teams.iter().collect();
        let mut rng = SeededRandom::new(5);

        let ranking = PerformanceTournament::rank(&refs, &mut rng);

        assert_eq!(ranking.len(), 4);
        assert_eq!(ranking.iter().map(|r| r.points).sum::<u32>(), 3 * 12);
        assert!(ranking.windows(2).all(|w| w[0].points >= w[1].points));
    }

    #[test]
    fn equal_minimal_teams_still_get_a_winner() {
        let teams = [team(1, 1), team(2, 1)];
        let refs: Vec<&Team> = teams.iter().collect();
        let mut rng = SeededRandom::new(5);

        let ranking = PerformanceTournament::rank(&refs, &mut rng);

        assert_eq!(ranking.iter().map(|r| r.points).sum::<u32>(), 6);
    }

    #[test]
    fn safe_human_stays_up() {
        let (mut upper, mut lower, teams) = setup();
        let mut rng = SeededRandom::new(3);

        let outcome = PromotionService::apply(
            &mut upper,
            &mut lower,
            &[1, 2, 3, 4],
            &[5, 6, 7, 8],
            &teams,
            Some(1),
            &mut rng,
        );

        assert_eq!(outcome.relegated.len(), 2);
        assert_eq!(outcome.promoted.len(), 2);
        assert!(!outcome.relegated.contains(&1));
        assert!(upper.contains(1));
        assert_sizes(&upper, &lower);
    }

    #[test]
    fn bottom_human_goes_down() {
        let (mut upper, mut lower, teams) = setup();
        let mut rng = SeededRandom::new(3);

        let outcome = PromotionService::apply(
            &mut upper,
            &mut lower,
            &[1, 2, 3, 4],
            &[5, 6, 7, 8],
            &teams,
            Some(4),
            &mut rng,
        );

        assert_eq!(outcome.relegated[0], 4);
        assert_eq!(outcome.relegated.len(), 2);
        assert!(lower.contains(4));
        assert_sizes(&upper, &lower);
    }

    #[test]
    fn top_human_goes_up() {
        let (mut upper, mut lower, teams) = setup();
        let mut rng = SeededRandom::new(3);

        let outcome = PromotionService::apply(
            &mut upper,
            &mut lower,
            &[1, 2, 3, 4],
            &[5, 6, 7, 8],
            &teams,
            Some(5),
            &mut rng,
        );

        assert_eq!(outcome.promoted[0], 5);
        assert!(upper.contains(5));
        assert_sizes(&upper, &lower);
    }

    #[test]
    fn unlinked_championship_is_left_alone() {
        let (mut upper, mut lower, teams) = setup();
        upper.settings.promotion = None;
        let mut rng = SeededRandom::new(3);

        let outcome = PromotionService::apply(
            &mut upper,
            &mut lower,
            &[1, 2, 3, 4],
            &[5, 6, 7, 8],
            &teams,
            Some(1),
            &mut rng,
        );

        assert_eq!(outcome, PromotionOutcome::default());
        assert_eq!(upper.team_ids, vec![1, 2, 3, 4]);
        assert_eq!(lower.team_ids, vec![5, 6, 7, 8]);
    }

    #[test]
    fn human_position_comes_from_the_ranking_before_any_swap() {
        // Team 1 came down from above and replaced team 6, which resets the table
        let mut middle = Championship::new(
            ChampionshipSettings::new(2, "Second".to_string()).with_promotion(3, 2),
            vec![5, 7, 8, 1],
        );
        let mut bottom = Championship::new(
            ChampionshipSettings::new(3, "Third".to_string()),
            vec![9, 10, 11, 12],
        );
        let teams = TeamCollection::new((1..=12).map(|id| team(id, 5 * id as u8)).collect());
        let mut rng = SeededRandom::new(8);

        let outcome = PromotionService::apply(
            &mut middle,
            &mut bottom,
            &[6, 7, 8, 5],
            &[9, 10, 11, 12],
            &teams,
            Some(5),
            &mut rng,
        );

        assert_eq!(outcome.relegated[0], 5);
        assert_eq!(outcome.relegated.len(), 2);
        assert!(!outcome.relegated.contains(&1));
        assert!(bottom.contains(5));
        assert!(middle.contains(1));
        assert_sizes(&middle, &bottom);
    }
}
