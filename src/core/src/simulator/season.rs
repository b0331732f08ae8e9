use crate::club::{MoraleModel, StrengthModel, TeamCollection};
use crate::error::SeasonError;
use crate::league::{Championship, LeagueResult, PromotionOutcome, PromotionService};
use crate::r#match::{Formation, Lineup, MatchDay, MatchResult, MatchSide, SquadSelector};
use crate::simulator::SeasonStatistics;
use crate::utils::RandomSource;
use chrono::{Datelike, Local};
use log::{debug, info, warn};

/// Whole simulation state: every base team and championship of one save.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonData {
    pub teams: TeamCollection,
    pub championships: Vec<Championship>,
    pub human_team_id: Option<u32>,
    pub year: i32,
    /// Rounds played this season.
    pub round: u32,
    pub formation: Formation,
    pub human_lineup: Option<Lineup>,
    pub statistics: SeasonStatistics,
}

impl SeasonData {
    pub fn new(
        teams: TeamCollection,
        championships: Vec<Championship>,
        human_team_id: Option<u32>,
    ) -> Self {
        SeasonData {
            teams,
            championships,
            human_team_id,
            year: Local::now().year(),
            round: 0,
            formation: Formation::default(),
            human_lineup: None,
            statistics: SeasonStatistics::default(),
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn with_formation(mut self, formation: Formation) -> Self {
        self.formation = formation;
        self
    }

    /// Hand-picked lineup used for the human team's next fixtures, checked
    /// against the roster. `None` goes back to formation selection.
    pub fn set_human_lineup(&mut self, lineup: Option<Lineup>) -> Result<(), SeasonError> {
        if let Some(lineup) = &lineup {
            let team = self
                .teams
                .by_id(lineup.team_id)
                .ok_or(SeasonError::UnknownTeam(lineup.team_id))?;

            SquadSelector::from_lineup(team, MatchSide::Home, &lineup.starter_ids, &lineup.substitute_ids)?;
        }

        self.human_lineup = lineup;
        Ok(())
    }

    pub fn championship(&self, id: u32) -> Option<&Championship> {
        self.championships.iter().find(|c| c.id() == id)
    }

    fn human_championship_index(&self) -> Option<usize> {
        let human = self.human_team_id?;
        self.championships.iter().position(|c| c.contains(human))
    }

    pub fn human_championship(&self) -> Option<&Championship> {
        self.human_championship_index()
            .map(|idx| &self.championships[idx])
    }

    pub fn start_season<R: RandomSource>(&mut self, rng: &mut R) -> Result<(), SeasonError> {
        self.teams = TeamCollection::new(
            self.teams
                .iter()
                .map(|team| StrengthModel::jitter(team, rng))
                .collect(),
        );

        for championship in self.championships.iter_mut() {
            championship.start_season(rng)?;
        }

        self.round = 0;
        self.statistics = SeasonStatistics::default();

        info!(
            "🏁 season {} started: {} championships, {} teams",
            self.year,
            self.championships.len(),
            self.teams.len()
        );

        Ok(())
    }

    /// Fresh moods for every player ahead of the next round.
    pub fn start_round<R: RandomSource>(&mut self, rng: &mut R) {
        self.teams = TeamCollection::new(
            self.teams
                .iter()
                .map(|team| StrengthModel::assign_moods(team, rng))
                .collect(),
        );
    }

    /// The human championship's next match day, to be ticked by a clock.
    pub fn watched_match_day(&self) -> Result<Option<MatchDay>, SeasonError> {
        let Some(idx) = self.human_championship_index() else {
            return Ok(None);
        };

        let championship = &self.championships[idx];
        if championship.is_phase_finished() {
            return Ok(None);
        }

        championship
            .prepare_match_day(&self.teams, self.formation, self.human_lineup.as_ref())
            .map(Some)
    }

    /// Completes the round everywhere. `watched` is the human championship's
    /// day played on the clock; every other championship is simulated here.
    pub fn finish_round<R: RandomSource>(
        &mut self,
        watched: Option<MatchDay>,
        rng: &mut R,
    ) -> Result<Vec<LeagueResult>, SeasonError> {
        let watched_index = watched.as_ref().and(self.human_championship_index());
        let mut watched = watched;

        let mut played: Vec<(usize, u32, Vec<MatchResult>)> = Vec::new();

        for (idx, championship) in self.championships.iter().enumerate() {
            if championship.is_phase_finished() {
                continue;
            }

            let day = if watched_index == Some(idx) {
                watched.take()
            } else {
                None
            };

            let day = match day {
                Some(day) => day,
                None => {
                    let mut day = championship.prepare_match_day(
                        &self.teams,
                        self.formation,
                        self.human_lineup.as_ref(),
                    )?;
                    day.play_to_end(rng);
                    day
                }
            };

            let results = day
                .results()
                .map_err(|_| SeasonError::RoundInProgress(day.round))?;

            played.push((idx, day.round, results));
        }

        if played.is_empty() {
            return Ok(Vec::new());
        }

        // Committed only when every championship took its round
        let mut championships = self.championships.clone();
        let mut league_results = Vec::with_capacity(played.len());

        for (idx, round, results) in played {
            let championship = &mut championships[idx];

            championship.complete_round(&results)?;
            if championship.is_phase_finished() {
                championship.advance_phase(rng)?;
            }

            league_results.push(LeagueResult::new(championship.id(), round, results));
        }

        self.championships = championships;

        let all_results: Vec<MatchResult> = league_results
            .iter()
            .flat_map(|r| r.match_results.iter().cloned())
            .collect();

        self.teams = TeamCollection::new(
            self.teams
                .iter()
                .map(|team| MoraleModel::apply_round(team, &all_results, rng))
                .collect(),
        );

        for result in &all_results {
            self.statistics.record(result);
        }

        self.round += 1;
        self.log_round(&league_results);

        Ok(league_results)
    }

    /// Plays a whole round without a clock.
    pub fn play_round<R: RandomSource>(&mut self, rng: &mut R) -> Result<Vec<LeagueResult>, SeasonError> {
        self.start_round(rng);
        self.finish_round(None, rng)
    }

    fn log_round(&self, league_results: &[LeagueResult]) {
        let goals: u32 = league_results.iter().map(|r| r.total_goals()).sum();
        let matches: usize = league_results.iter().map(|r| r.match_results.len()).sum();

        info!("⚽ round {}: {} matches, {} goals", self.round, matches, goals);

        let Some(human) = self.human_team_id else {
            return;
        };

        let human_result = league_results.iter().find_map(|r| r.result_for(human));
        match human_result {
            Some(result) => {
                let name = |id: u32| {
                    self.teams
                        .by_id(id)
                        .map(|t| t.name.clone())
                        .unwrap_or_else(|| id.to_string())
                };

                info!(
                    "👤 {} {} - {} {}",
                    name(result.home_team_id),
                    result.score.home,
                    result.score.away,
                    name(result.away_team_id)
                );

                if let (Some(championship), Some(team)) =
                    (self.human_championship(), self.teams.by_id(human))
                {
                    debug!(
                        "{}: position {:?}, mood {}",
                        team.name,
                        championship.position_of(human),
                        team.overall_mood()
                    );
                }
            }
            None => debug!("human team rests in round {}", self.round),
        }
    }

    /// Every championship has a calendar for this season.
    pub fn is_season_started(&self) -> bool {
        self.championships.iter().all(Championship::is_started)
    }

    pub fn is_season_finished(&self) -> bool {
        self.championships.iter().all(Championship::is_finished)
    }

    /// Promotion and relegation between linked championships, then the
    /// calendar year moves on.
    pub fn end_season<R: RandomSource>(
        &mut self,
        rng: &mut R,
    ) -> Result<Vec<PromotionOutcome>, SeasonError> {
        if !self.is_season_finished() {
            return Err(SeasonError::RoundInProgress(self.round));
        }

        self.log_season();

        // Swaps reset tables, so every ranking is read up front
        let rankings: Vec<Vec<u32>> = self
            .championships
            .iter()
            .map(Championship::final_ranking)
            .collect();

        let mut outcomes = Vec::new();

        for idx in 0..self.championships.len() {
            let Some(promotion) = self.championships[idx].settings.promotion.clone() else {
                continue;
            };

            let linked = self
                .championships
                .iter()
                .position(|c| c.id() == promotion.linked_championship_id);

            let lower_idx = match linked {
                Some(lower_idx) if lower_idx != idx => lower_idx,
                Some(_) => {
                    warn!("championship {} is linked to itself", promotion.linked_championship_id);
                    continue;
                }
                None => {
                    info!(
                        "{}: linked championship {} not found, teams carry over",
                        self.championships[idx].name(),
                        promotion.linked_championship_id
                    );
                    continue;
                }
            };

            let (upper, lower) = Self::pair_mut(&mut self.championships, idx, lower_idx);

            outcomes.push(PromotionService::apply(
                upper,
                lower,
                &rankings[idx],
                &rankings[lower_idx],
                &self.teams,
                self.human_team_id,
                rng,
            ));
        }

        self.year += 1;
        self.round = 0;

        info!("📆 season {} is next", self.year);

        Ok(outcomes)
    }

    fn log_season(&self) {
        for championship in &self.championships {
            if let Some(team) = championship.champion().and_then(|id| self.teams.by_id(id)) {
                info!("🏆 {} {}: {}", championship.name(), self.year, team.name);
            }
        }

        if let Some(top) = self.statistics.top_scorer() {
            info!(
                "👟 top scorer {}: {} goals, {} goals in {} matches overall",
                top.name, top.goals, self.statistics.total_goals, self.statistics.matches_played
            );
        }
    }

    fn pair_mut<T>(items: &mut [T], first: usize, second: usize) -> (&mut T, &mut T) {
        if first < second {
            let (left, right) = items.split_at_mut(second);
            (&mut left[first], &mut right[0])
        } else {
            let (left, right) = items.split_at_mut(first);
            (&mut right[0], &mut left[second])
        }
    }
}
