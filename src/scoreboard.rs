use football_core::{MatchDay, MatchEvent, MatchEventListener, MatchSide};
use log::{debug, info};
use std::collections::HashMap;

/// Prints goals of the watched round as they happen.
#[derive(Debug, Default)]
pub struct Scoreboard {
    fixtures: HashMap<String, (String, String)>,
    scores: HashMap<String, (u8, u8)>,
}

impl Scoreboard {
    pub fn watch(match_day: &MatchDay) -> Self {
        let fixtures = match_day
            .matches
            .iter()
            .map(|game| {
                (
                    game.id.clone(),
                    (game.home.team_name.clone(), game.away.team_name.clone()),
                )
            })
            .collect();

        Scoreboard {
            fixtures,
            scores: HashMap::new(),
        }
    }

    fn line(&self, match_id: &str) -> String {
        let (home, away) = self.scores.get(match_id).copied().unwrap_or_default();

        match self.fixtures.get(match_id) {
            Some((home_name, away_name)) => {
                format!("{} {} - {} {}", home_name, home, away, away_name)
            }
            None => format!("{} {} - {}", match_id, home, away),
        }
    }
}

impl MatchEventListener for Scoreboard {
    fn on_event(&mut self, event: &MatchEvent) {
        match event {
            MatchEvent::ScorerChanged {
                match_id,
                scorer,
                minute,
            } => {
                debug!("{}: goal by {} at {}'", match_id, scorer, minute);
            }
            MatchEvent::ScoreIncreased { match_id, side } => {
                let score = self.scores.entry(match_id.clone()).or_default();

                match side {
                    MatchSide::Home => score.0 += 1,
                    MatchSide::Away => score.1 += 1,
                }

                info!("⚽ {}", self.line(match_id));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use football_core::EventDispatcher;

    #[test]
    fn keeps_a_running_score() {
        let mut scoreboard = Scoreboard::default();

        EventDispatcher::dispatch(
            &[
                MatchEvent::ScorerChanged {
                    match_id: "m".to_string(),
                    scorer: "Nine".to_string(),
                    minute: 12,
                },
                MatchEvent::ScoreIncreased {
                    match_id: "m".to_string(),
                    side: MatchSide::Away,
                },
                MatchEvent::ScoreIncreased {
                    match_id: "m".to_string(),
                    side: MatchSide::Away,
                },
            ],
            &mut scoreboard,
        );

        assert_eq!(scoreboard.scores.get("m"), Some(&(0, 2)));
        assert_eq!(scoreboard.line("m"), "m 0 - 2");
    }
}
