use crate::club::{Player, PlayerFieldPositionGroup, Team};
use crate::error::MatchError;
use crate::r#match::{Formation, MatchSide, MatchTeam, SQUAD_MAX_SUBSTITUTES, SQUAD_STARTERS};
use itertools::Itertools;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub struct SquadSelector;

pub struct PlayerSelectionResult {
    pub main_squad: Vec<Player>,
    pub substitutes: Vec<Player>,
}

impl SquadSelector {
    /// Automatic selection: the strongest players for each line of the formation.
    pub fn select(team: &Team, side: MatchSide, formation: Formation) -> MatchTeam {
        let selection = Self::select_players(team, formation);

        debug!(
            "{} lines up {} - Main: {}, Subs: {}",
            team.name,
            formation,
            selection.main_squad.len(),
            selection.substitutes.len()
        );

        MatchTeam::new(
            team.id,
            team.name.clone(),
            side,
            selection.main_squad,
            selection.substitutes,
        )
    }

    pub fn select_players(team: &Team, formation: Formation) -> PlayerSelectionResult {
        let ranked: Vec<&Player> = team
            .players
            .iter()
            .sorted_by(|a, b| b.strength.cmp(&a.strength).then(a.id.cmp(&b.id)))
            .collect();

        if ranked.len() < SQUAD_STARTERS {
            warn!("Not enough players for a full squad in {}: {}", team.name, ranked.len());
        }

        let mut used: HashSet<u32> = HashSet::new();
        let mut main_squad: Vec<Player> = Vec::with_capacity(SQUAD_STARTERS);

        for group in PlayerFieldPositionGroup::ALL {
            let required = formation.required(group);

            let picked: Vec<&Player> = ranked
                .iter()
                .filter(|p| p.position == group && !used.contains(&p.id))
                .take(required)
                .copied()
                .collect();

            if picked.len() < required {
                warn!(
                    "{} is short of {} for {}: {} of {}",
                    team.name,
                    group,
                    formation,
                    picked.len(),
                    required
                );
            }

            for player in picked {
                used.insert(player.id);
                main_squad.push(player.clone());
            }
        }

        // Fill remaining spots with the best of the rest, whatever their position
        for player in &ranked {
            if main_squad.len() >= SQUAD_STARTERS {
                break;
            }
            if used.insert(player.id) {
                main_squad.push((*player).clone());
            }
        }

        main_squad.sort_by_key(|p| (p.lineup_order(), p.id));

        let substitutes = ranked
            .iter()
            .filter(|p| !used.contains(&p.id))
            .take(SQUAD_MAX_SUBSTITUTES)
            .map(|p| (*p).clone())
            .collect();

        PlayerSelectionResult {
            main_squad,
            substitutes,
        }
    }

    /// Lineup picked by hand: exactly 11 distinct starters from the roster.
    pub fn from_lineup(
        team: &Team,
        side: MatchSide,
        starter_ids: &[u32],
        substitute_ids: &[u32],
    ) -> Result<MatchTeam, MatchError> {
        let distinct: HashSet<u32> = starter_ids.iter().copied().collect();
        if starter_ids.len() != SQUAD_STARTERS || distinct.len() != SQUAD_STARTERS {
            return Err(MatchError::SquadIncomplete {
                team_id: team.id,
                starters: distinct.len(),
            });
        }

        let starters = starter_ids
            .iter()
            .map(|id| team.player(*id).cloned().ok_or(MatchError::PlayerNotInSquad(*id)))
            .collect::<Result<Vec<Player>, MatchError>>()?;

        let substitutes = substitute_ids
            .iter()
            .filter(|id| !distinct.contains(*id))
            .unique()
            .take(SQUAD_MAX_SUBSTITUTES)
            .map(|id| team.player(*id).cloned().ok_or(MatchError::SubstituteNotOnBench(*id)))
            .collect::<Result<Vec<Player>, MatchError>>()?;

        Ok(MatchTeam::new(team.id, team.name.clone(), side, starters, substitutes))
    }
}

/// Hand-picked starters and bench for one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineup {
    pub team_id: u32,
    pub starter_ids: Vec<u32>,
    pub substitute_ids: Vec<u32>,
}

impl SquadSelector {
    /// Uses the team's lineup when one is given, formation selection otherwise.
    pub fn for_fixture(
        team: &Team,
        side: MatchSide,
        formation: Formation,
        lineup: Option<&Lineup>,
    ) -> Result<MatchTeam, MatchError> {
        match lineup.filter(|l| l.team_id == team.id) {
            Some(lineup) => Self::from_lineup(team, side, &lineup.starter_ids, &lineup.substitute_ids),
            None => Ok(Self::select(team, side, formation)),
        }
    }
}
