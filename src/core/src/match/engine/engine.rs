use crate::club::Player;
use crate::error::MatchError;
use crate::r#match::{
    FieldZone, Goal, Match, MatchEvent, MatchSide, MatchTeam, Possession, StateManager,
    MATCH_FINAL_MINUTE,
};
use crate::utils::RandomSource;
use log::debug;

/// What the side in possession tries during one minute.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MatchAction {
    Hold,
    Advance,
    Retreat,
    Shoot,
}

impl MatchAction {
    /// Weighted action table, `roll` in `[0, 100)`.
    pub fn choose(zone: FieldZone, roll: u32) -> MatchAction {
        match zone {
            FieldZone::Defense => match roll {
                0..60 => MatchAction::Hold,
                60..99 => MatchAction::Advance,
                _ => MatchAction::Shoot,
            },
            FieldZone::Midfield => match roll {
                0..80 => MatchAction::Hold,
                80..98 => MatchAction::Advance,
                _ => MatchAction::Shoot,
            },
            FieldZone::Attack => match roll {
                0..60 => MatchAction::Hold,
                60..70 => MatchAction::Retreat,
                _ => MatchAction::Shoot,
            },
        }
    }
}

pub struct MatchTick {
    pub state: Match,
    pub events: Vec<MatchEvent>,
}

pub struct MatchEngine;

impl MatchEngine {
    /// Plays `minute` on a copy of `current`; the original is never touched.
    pub fn advance<R: RandomSource>(
        current: &Match,
        minute: u8,
        rng: &mut R,
    ) -> Result<MatchTick, MatchError> {
        let expected = current
            .next_minute()
            .ok_or_else(|| MatchError::MatchFinished(current.id.clone()))?;

        if minute != expected {
            return Err(MatchError::UnexpectedMinute {
                match_id: current.id.clone(),
                expected,
                actual: minute,
            });
        }

        let mut next = current.clone();
        let mut events = Vec::new();

        match minute {
            0 => Self::kickoff(&mut next, rng),
            MATCH_FINAL_MINUTE => Self::end_of_match(&next),
            _ => Self::play_minute(&mut next, minute, rng, &mut events),
        }

        next.minute = minute;
        next.state = StateManager::state_after(minute);

        Ok(MatchTick {
            state: next,
            events,
        })
    }

    pub fn kickoff<R: RandomSource>(game: &mut Match, rng: &mut R) {
        let side = if rng.coin() {
            MatchSide::Home
        } else {
            MatchSide::Away
        };

        game.possession = Possession::kickoff(side);

        debug!(
            "kickoff {}: {} vs {}, {:?} starts",
            game.id, game.home.team_name, game.away.team_name, side
        );
    }

    fn play_minute<R: RandomSource>(
        game: &mut Match,
        minute: u8,
        rng: &mut R,
        events: &mut Vec<MatchEvent>,
    ) {
        let zone = game.possession.zone;

        match MatchAction::choose(zone, rng.roll()) {
            MatchAction::Hold => {
                Self::contest(game, zone, rng);
            }
            MatchAction::Advance => {
                Self::contest(game, zone.forward(), rng);
            }
            MatchAction::Retreat => {
                Self::contest(game, zone.backward(), rng);
            }
            MatchAction::Shoot => {
                if let Err(error) = Self::shoot(game, minute, rng, events) {
                    debug!("shot skipped in {} at {}': {}", game.id, minute, error);
                }
            }
        }
    }

    /// Movement contest between the zone's line and the opponent's mirrored line.
    /// Returns whether the side in possession kept the ball.
    pub fn contest<R: RandomSource>(game: &mut Match, target: FieldZone, rng: &mut R) -> bool {
        let side = game.possession.side;
        let zone = game.possession.zone;

        let attacking = game.team(side).strength().group(zone.position_group());
        let defending = game
            .team(side.opposite())
            .strength()
            .group(zone.mirror().position_group());

        let attack_draw = rng.draw(attacking);
        let defense_draw = rng.draw(defending);

        if attack_draw >= defense_draw {
            game.possession = game.possession.moved_to(target);
            true
        } else {
            game.possession = game.possession.turnover();
            false
        }
    }

    pub fn pick_shooter<R: RandomSource>(
        team: &MatchTeam,
        zone: FieldZone,
        rng: &mut R,
    ) -> Result<Player, MatchError> {
        let group = zone.position_group();
        let candidates = team.starters_in(group);

        rng.pick(&candidates)
            .map(|player| (*player).clone())
            .ok_or(MatchError::EmptyPositionGroup {
                team_id: team.team_id,
                group,
            })
    }

    /// Returns whether the shot went in.
    fn shoot<R: RandomSource>(
        game: &mut Match,
        minute: u8,
        rng: &mut R,
        events: &mut Vec<MatchEvent>,
    ) -> Result<bool, MatchError> {
        let side = game.possession.side;
        let shooter = Self::pick_shooter(game.team(side), game.possession.zone, rng)?;

        game.shot_attempts += 1;

        let shot = rng.draw(shooter.strength as u32);
        let wall = rng.draw(game.team(side.opposite()).strength().defensive_wall());

        if shot > wall {
            Self::score_goal(game, side, &shooter, minute, events);
            return Ok(true);
        }

        game.possession = game.possession.turnover();
        Ok(false)
    }

    fn score_goal(
        game: &mut Match,
        side: MatchSide,
        shooter: &Player,
        minute: u8,
        events: &mut Vec<MatchEvent>,
    ) {
        game.team_mut(side).goals += 1;

        let goal = Goal {
            player_id: shooter.id,
            scorer: shooter.name.clone(),
            side,
            minute,
        };

        debug!(
            "goal in {}: {} {}' ({} - {})",
            game.id, goal.scorer, minute, game.home.goals, game.away.goals
        );

        events.push(MatchEvent::ScorerChanged {
            match_id: game.id.clone(),
            scorer: goal.scorer.clone(),
            minute,
        });
        events.push(MatchEvent::ScoreIncreased {
            match_id: game.id.clone(),
            side,
        });

        game.last_scorer = Some(goal.clone());
        game.scorers.push(goal);

        // Kickoff after a goal goes to the side that conceded
        game.possession = Possession::kickoff(side.opposite());
    }

    fn end_of_match(game: &Match) {
        debug!(
            "final whistle {}: {} {} - {} {}",
            game.id, game.home.team_name, game.home.goals, game.away.goals, game.away.team_name
        );
    }
}
