use crate::club::TeamCollection;
use crate::error::{ScheduleError, SeasonError};
use crate::league::{
    ChampionshipPhase, ChampionshipSettings, GroupSplitter, GroupTable, LeagueTable,
    ScheduleGenerator, SeasonRound, TableStanding,
};
use crate::r#match::{Formation, Lineup, Match, MatchDay, MatchResult, MatchSide, SquadSelector};
use crate::utils::RandomSource;
use log::{debug, info};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Championship {
    pub settings: ChampionshipSettings,
    pub team_ids: Vec<u32>,
    pub calendar: Vec<SeasonRound>,
    pub table: LeagueTable,
    pub groups: Vec<GroupTable>,
    /// Index into the settings' phases.
    pub phase: usize,
    /// Last completed round of the current phase calendar.
    pub round: u32,
}

impl Championship {
    pub fn new(settings: ChampionshipSettings, team_ids: Vec<u32>) -> Self {
        let table = LeagueTable::new(&team_ids);

        Championship {
            settings,
            team_ids,
            calendar: Vec::new(),
            table,
            groups: Vec::new(),
            phase: 0,
            round: 0,
        }
    }

    pub fn id(&self) -> u32 {
        self.settings.id
    }

    pub fn name(&self) -> &str {
        &self.settings.name
    }

    pub fn contains(&self, team_id: u32) -> bool {
        self.team_ids.contains(&team_id)
    }

    pub fn current_phase(&self) -> ChampionshipPhase {
        self.settings
            .phases()
            .get(self.phase)
            .copied()
            .unwrap_or(ChampionshipPhase::League)
    }

    /// Fresh table and calendar for the first phase.
    pub fn start_season<R: RandomSource>(&mut self, rng: &mut R) -> Result<(), ScheduleError> {
        self.phase = 0;
        self.round = 0;
        self.groups.clear();
        self.table = LeagueTable::new(&self.team_ids);
        self.calendar = ScheduleGenerator::generate(&self.calendar_prefix(), &self.team_ids, rng)?;

        info!(
            "📅 {}: {} teams, {} rounds",
            self.settings.name,
            self.team_ids.len(),
            self.calendar.len()
        );

        Ok(())
    }

    fn calendar_prefix(&self) -> String {
        format!("{}-p{}", self.settings.id, self.phase + 1)
    }

    pub fn next_fixtures(&self) -> Option<&SeasonRound> {
        self.calendar.iter().find(|r| r.round == self.round + 1)
    }

    /// Match day for the next round, squads picked by formation unless a
    /// lineup is given for one of the teams.
    pub fn prepare_match_day(
        &self,
        teams: &TeamCollection,
        formation: Formation,
        lineup: Option<&Lineup>,
    ) -> Result<MatchDay, SeasonError> {
        let round = self
            .next_fixtures()
            .ok_or(SeasonError::SeasonFinished(self.settings.id))?;

        let matches = round
            .matches
            .iter()
            .map(|fixture| -> Result<Match, SeasonError> {
                let home = teams
                    .by_id(fixture.home_team_id)
                    .ok_or(SeasonError::UnknownTeam(fixture.home_team_id))?;
                let away = teams
                    .by_id(fixture.away_team_id)
                    .ok_or(SeasonError::UnknownTeam(fixture.away_team_id))?;

                Ok(Match::make(
                    fixture.id.clone(),
                    fixture.round,
                    SquadSelector::for_fixture(home, MatchSide::Home, formation, lineup)?,
                    SquadSelector::for_fixture(away, MatchSide::Away, formation, lineup)?,
                ))
            })
            .collect::<Result<Vec<Match>, SeasonError>>()?;

        Ok(MatchDay::new(round.round, matches))
    }

    /// Records the next round's results into the calendar and standings.
    pub fn complete_round(&mut self, results: &[MatchResult]) -> Result<(), SeasonError> {
        let round_number = self.round + 1;
        let championship_id = self.settings.id;

        let round = self
            .calendar
            .iter_mut()
            .find(|r| r.round == round_number)
            .ok_or(SeasonError::SeasonFinished(championship_id))?;

        let mut played = Vec::with_capacity(round.matches.len());
        for fixture in &round.matches {
            let result = results
                .iter()
                .find(|r| r.match_id == fixture.id)
                .ok_or(SeasonError::RoundInProgress(round_number))?;

            played.push(result.clone());
        }

        for (fixture, result) in round.matches.iter_mut().zip(&played) {
            fixture.record(result.score);
        }

        match self.current_phase() {
            ChampionshipPhase::League => self.table.update(&played),
            ChampionshipPhase::Groups => {
                for group in self.groups.iter_mut() {
                    group.update(&played);
                }
            }
        }

        self.round = round_number;

        debug!(
            "{}: round {} recorded, {} matches",
            self.settings.name,
            round_number,
            played.len()
        );

        Ok(())
    }

    /// A calendar exists once the season has been started.
    pub fn is_started(&self) -> bool {
        !self.calendar.is_empty()
    }

    pub fn is_phase_finished(&self) -> bool {
        self.next_fixtures().is_none()
    }

    pub fn has_next_phase(&self) -> bool {
        self.phase + 1 < self.settings.phases().len()
    }

    /// Moves to the next phase once the current one is done. Returns whether
    /// a new phase started.
    pub fn advance_phase<R: RandomSource>(&mut self, rng: &mut R) -> Result<bool, ScheduleError> {
        if !self.is_phase_finished() || !self.has_next_phase() {
            return Ok(false);
        }

        self.phase += 1;
        self.round = 0;

        match self.current_phase() {
            ChampionshipPhase::League => {
                self.groups.clear();
                self.table = self.table.reset();
                self.calendar =
                    ScheduleGenerator::generate(&self.calendar_prefix(), &self.team_ids, rng)?;
            }
            ChampionshipPhase::Groups => {
                self.groups = GroupSplitter::split(&self.table, self.settings.group_size);

                let prefix = self.calendar_prefix();
                let mut calendars = Vec::with_capacity(self.groups.len());

                for group in self.groups.iter().filter(|g| g.team_ids.len() >= 2) {
                    calendars.push(ScheduleGenerator::generate(
                        &format!("{}-{}", prefix, group.name),
                        &group.team_ids,
                        rng,
                    )?);
                }

                self.calendar = ScheduleGenerator::merge(calendars);
            }
        }

        info!(
            "🔀 {} moves to {}: {} rounds",
            self.settings.name,
            self.current_phase(),
            self.calendar.len()
        );

        Ok(true)
    }

    pub fn is_finished(&self) -> bool {
        self.is_started() && self.is_phase_finished() && !self.has_next_phase()
    }

    /// Team ids from first to last. In a group phase, group leaders come
    /// first, then runners-up, and so on.
    pub fn final_ranking(&self) -> Vec<u32> {
        if self.current_phase() != ChampionshipPhase::Groups || self.groups.is_empty() {
            return self.table.team_ids();
        }

        let mut placed: Vec<(usize, &TableStanding)> = self
            .groups
            .iter()
            .flat_map(|g| g.table.rows.iter().enumerate())
            .collect();

        placed.sort_by(|(pos_a, a), (pos_b, b)| pos_a.cmp(pos_b).then_with(|| a.ranking(b)));

        placed.into_iter().map(|(_, row)| row.team_id).collect()
    }

    /// One-based final position.
    pub fn position_of(&self, team_id: u32) -> Option<usize> {
        self.final_ranking()
            .iter()
            .position(|id| *id == team_id)
            .map(|idx| idx + 1)
    }

    pub fn champion(&self) -> Option<u32> {
        if !self.is_finished() {
            return None;
        }

        self.final_ranking().first().copied()
    }

    /// Swaps teams in and out between seasons.
    pub fn replace_teams(&mut self, leaving: &[u32], joining: &[u32]) {
        self.team_ids.retain(|id| !leaving.contains(id));
        self.team_ids.extend(joining.iter().copied());
        self.table = LeagueTable::new(&self.team_ids);
        self.groups.clear();
    }
}
