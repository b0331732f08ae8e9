use crate::club::PlayerFieldPositionGroup;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("team {team_id} has no {group} on the pitch")]
    EmptyPositionGroup {
        team_id: u32,
        group: PlayerFieldPositionGroup,
    },
    #[error("match {0} is already finished")]
    MatchFinished(String),
    #[error("match {match_id} expected minute {expected}, got {actual}")]
    UnexpectedMinute {
        match_id: String,
        expected: u8,
        actual: u8,
    },
    #[error("player {0} is not on the pitch")]
    PlayerNotInSquad(u32),
    #[error("player {0} is not on the bench")]
    SubstituteNotOnBench(u32),
    #[error("team {team_id} needs 11 distinct starters, got {starters}")]
    SquadIncomplete { team_id: u32, starters: usize },
    #[error("unknown match {0}")]
    UnknownMatch(String),
    #[error("round {0} is still in progress")]
    RoundInProgress(u32),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("a calendar needs at least two teams, got {0}")]
    NotEnoughTeams(usize),
    #[error("team {0} appears twice in the calendar input")]
    DuplicateTeam(u32),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SeasonError {
    #[error("unknown team {0}")]
    UnknownTeam(u32),
    #[error("unknown championship {0}")]
    UnknownChampionship(u32),
    #[error("round {0} has not been completed yet")]
    RoundInProgress(u32),
    #[error("championship {0} has no rounds left")]
    SeasonFinished(u32),
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
    #[error(transparent)]
    Match(#[from] MatchError),
}
