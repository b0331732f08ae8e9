use crate::error::MatchError;
use crate::r#match::{
    Match, MatchEngine, MatchEvent, MatchResult, MatchSide, MATCH_FINAL_MINUTE,
};
use crate::utils::{Logging, RandomSource, SeededRandom};
use log::{debug, warn};
use rayon::prelude::*;

/// All matches of one round, ticked together one minute at a time.
#[derive(Debug, Clone)]
pub struct MatchDay {
    pub round: u32,
    pub matches: Vec<Match>,
    next_minute: u8,
}

impl MatchDay {
    pub fn new(round: u32, matches: Vec<Match>) -> Self {
        MatchDay {
            round,
            matches,
            next_minute: 0,
        }
    }

    /// Minute the next `tick` plays, `None` once every match is over.
    pub fn next_minute(&self) -> Option<u8> {
        if self.is_finished() {
            None
        } else {
            Some(self.next_minute)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.matches.iter().all(Match::is_finished)
    }

    pub fn get(&self, match_id: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == match_id)
    }

    /// Advances every unfinished match by one minute as one batch.
    ///
    /// Every match is asked for the batch minute. A match out of step, or one
    /// whose tick fails, keeps its previous state; the rest of the batch is
    /// unaffected. When the batch reaches the final minute, matches
    /// still behind are stopped where they stand.
    pub fn tick<R: RandomSource>(&mut self, rng: &mut R) -> Vec<MatchEvent> {
        let mut events = Vec::new();

        if self.is_finished() {
            return events;
        }

        let minute = self.next_minute;

        for game in self.matches.iter_mut().filter(|m| !m.is_finished()) {
            match MatchEngine::advance(game, minute, rng) {
                Ok(tick) => {
                    *game = tick.state;
                    events.extend(tick.events);
                }
                Err(error) => {
                    warn!("match {} skipped minute {}: {}", game.id, minute, error);
                }
            }
        }

        if self.next_minute >= MATCH_FINAL_MINUTE {
            self.force_finish();
        } else {
            self.next_minute += 1;
        }

        events
    }

    fn force_finish(&mut self) {
        for game in self.matches.iter_mut().filter(|m| !m.is_finished()) {
            warn!(
                "match {} stopped at minute {} with the rest of round {}",
                game.id, game.minute, self.round
            );
            *game = game.finished();
        }
    }

    /// Swaps a starter for a substitute between ticks.
    pub fn substitute(
        &mut self,
        match_id: &str,
        side: MatchSide,
        out_id: u32,
        in_id: u32,
    ) -> Result<(), MatchError> {
        let game = self
            .matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or_else(|| MatchError::UnknownMatch(match_id.to_string()))?;

        if game.is_finished() {
            return Err(MatchError::MatchFinished(game.id.clone()));
        }

        game.team_mut(side).substitute(out_id, in_id)?;

        debug!(
            "substitution in {}: {} off, {} on",
            match_id, out_id, in_id
        );

        Ok(())
    }

    /// Frozen results, available once every match reached the final whistle.
    pub fn results(&self) -> Result<Vec<MatchResult>, MatchError> {
        self.matches
            .iter()
            .map(|game| game.result().ok_or(MatchError::RoundInProgress(self.round)))
            .collect()
    }

    /// Simulates the rest of the round at once, matches in parallel.
    pub fn play_to_end<R: RandomSource>(&mut self, rng: &mut R) -> Vec<MatchEvent> {
        let generators: Vec<SeededRandom> = self.matches.iter().map(|_| rng.fork()).collect();
        let round = self.round;

        let events: Vec<Vec<MatchEvent>> = Logging::estimate_result(
            || {
                self.matches
                    .par_iter_mut()
                    .zip(generators.into_par_iter())
                    .map(|(game, mut generator)| Self::play_match(game, &mut generator))
                    .collect()
            },
            &format!("play round {}", round),
        );

        self.next_minute = MATCH_FINAL_MINUTE;

        events.into_iter().flatten().collect()
    }

    fn play_match<R: RandomSource>(game: &mut Match, rng: &mut R) -> Vec<MatchEvent> {
        let mut events = Vec::new();

        while let Some(minute) = game.next_minute() {
            match MatchEngine::advance(game, minute, rng) {
                Ok(tick) => {
                    *game = tick.state;
                    events.extend(tick.events);
                }
                Err(error) => {
                    warn!("match {} stopped at minute {}: {}", game.id, minute, error);
                    *game = game.finished();
                }
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{Player, PlayerFieldPositionGroup};
    use crate::r#match::{MatchState, MatchTeam};

    fn team(team_id: u32, first_id: u32) -> MatchTeam {
        let positions = [
            PlayerFieldPositionGroup::Goalkeeper,
            PlayerFieldPositionGroup::Defender,
            PlayerFieldPositionGroup::Defender,
            PlayerFieldPositionGroup::Defender,
            PlayerFieldPositionGroup::Defender,
            PlayerFieldPositionGroup::Midfielder,
            PlayerFieldPositionGroup::Midfielder,
            PlayerFieldPositionGroup::Midfielder,
            PlayerFieldPositionGroup::Midfielder,
            PlayerFieldPositionGroup::Forward,
            PlayerFieldPositionGroup::Forward,
            PlayerFieldPositionGroup::Forward,
        ];

        let mut players: Vec<Player> = positions
            .iter()
            .enumerate()
            .map(|(idx, position)| {
                Player::builder()
                    .id(first_id + idx as u32)
                    .name(format!("Player {}", first_id + idx as u32))
                    .position(*position)
                    .strength(60)
                    .build()
                    .unwrap()
            })
            .collect();

        let bench = players.split_off(11);

        MatchTeam::new(team_id, format!("Team {}", team_id), MatchSide::Home, players, bench)
    }

    fn day() -> MatchDay {
        MatchDay::new(
            3,
            vec![
                Match::make("a".to_string(), 3, team(1, 100), team(2, 200)),
                Match::make("b".to_string(), 3, team(3, 300), team(4, 400)),
            ],
        )
    }

    #[test]
    fn ninety_one_ticks_finish_the_round() {
        let mut day = day();
        let mut rng = SeededRandom::new(4);

        for _ in 0..=MATCH_FINAL_MINUTE {
            assert!(day.results().is_err());
            day.tick(&mut rng);
        }

        assert!(day.is_finished());
        assert_eq!(day.next_minute(), None);
        assert_eq!(day.results().unwrap().len(), 2);
    }

    #[test]
    fn results_wait_for_the_whole_round() {
        let mut day = day();
        let mut rng = SeededRandom::new(4);

        day.tick(&mut rng);

        assert_eq!(day.results().err(), Some(MatchError::RoundInProgress(3)));
    }

    #[test]
    fn stalled_match_keeps_its_state_and_is_stopped_at_the_end() {
        let mut day = day();
        let mut rng = SeededRandom::new(9);

        // Out of step with the batch, this match never advances on its own
        day.matches[1].state = MatchState::InProgress;
        day.matches[1].minute = MATCH_FINAL_MINUTE;

        day.tick(&mut rng);
        assert_eq!(day.matches[1].minute, MATCH_FINAL_MINUTE);
        assert_eq!(day.matches[1].state, MatchState::InProgress);
        assert_eq!(day.matches[0].state, MatchState::InProgress);

        while day.next_minute().is_some() {
            day.tick(&mut rng);
        }

        assert!(day.matches.iter().all(Match::is_finished));
        assert_eq!(day.results().unwrap().len(), 2);
    }

    #[test]
    fn match_out_of_step_is_not_advanced_with_the_batch() {
        let mut day = day();
        let mut rng = SeededRandom::new(12);

        day.tick(&mut rng);
        day.matches[1].minute = 5;
        let stalled = day.matches[1].clone();

        day.tick(&mut rng);
        assert_eq!(day.matches[0].minute, 1);
        assert_eq!(day.matches[1], stalled);

        // Batch minutes 2 to 5 are refused too, minute 6 lines up again
        for _ in 2..=5 {
            day.tick(&mut rng);
        }
        assert_eq!(day.matches[1], stalled);

        day.tick(&mut rng);
        assert_eq!(day.matches[1].minute, 6);

        while day.next_minute().is_some() {
            day.tick(&mut rng);
        }

        assert_eq!(day.results().unwrap().len(), 2);
    }

    #[test]
    fn substitution_between_ticks() {
        let mut day = day();
        let mut rng = SeededRandom::new(1);
        day.tick(&mut rng);

        day.substitute("a", MatchSide::Away, 209, 211).unwrap();

        let game = day.get("a").unwrap();
        assert!(game.away.starters.iter().any(|p| p.id == 211));
        assert_eq!(game.away.starters.len(), 11);
        assert_eq!(game.away.substituted, vec![209]);

        assert_eq!(
            day.substitute("a", MatchSide::Away, 211, 209).err(),
            Some(MatchError::SubstituteNotOnBench(209))
        );
        assert_eq!(
            day.substitute("zzz", MatchSide::Home, 1, 2).err(),
            Some(MatchError::UnknownMatch("zzz".to_string()))
        );
    }

    #[test]
    fn play_to_end_is_reproducible() {
        let mut first = day();
        let mut second = day();

        let first_events = first.play_to_end(&mut SeededRandom::new(21));
        let second_events = second.play_to_end(&mut SeededRandom::new(21));

        assert!(first.is_finished());
        assert_eq!(first_events, second_events);
        assert_eq!(first.results().unwrap(), second.results().unwrap());
    }
}
