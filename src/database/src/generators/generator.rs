use crate::generators::PlayerGenerator;
use crate::DatabaseEntity;
use football_core::{
    Championship, RandomSource, SeasonData, Team, TeamCollection, TeamColors,
};
use log::info;

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    /// New game: generated rosters for every team, championships as loaded.
    pub fn generate<R: RandomSource>(
        data: &DatabaseEntity,
        human_team_id: Option<u32>,
        rng: &mut R,
    ) -> Result<SeasonData, String> {
        let mut player_generator = PlayerGenerator::with_people_names(&data.names);

        let teams = data
            .teams
            .iter()
            .map(|team| {
                let players = player_generator.generate_roster(team.strength, rng)?;

                Team::builder()
                    .id(team.id)
                    .name(team.name.clone())
                    .short_name(team.short_name.clone())
                    .abbreviation(team.abbreviation.clone())
                    .colors(TeamColors::new(
                        &team.colors.primary,
                        &team.colors.secondary,
                        &team.colors.text,
                    ))
                    .players(players)
                    .build()
            })
            .collect::<Result<Vec<Team>, String>>()?;

        let teams = TeamCollection::new(teams);

        let championships: Vec<Championship> = data
            .championships
            .iter()
            .map(|c| Championship::new(c.settings.clone(), c.teams.clone()))
            .collect();

        for championship in &championships {
            if let Some(missing) = championship.team_ids.iter().find(|id| !teams.contains(**id)) {
                return Err(format!(
                    "championship {} references unknown team {}",
                    championship.id(),
                    missing
                ));
            }
        }

        let human_team_id = match human_team_id {
            Some(id) if !teams.contains(id) => return Err(format!("unknown human team {}", id)),
            Some(id) => Some(id),
            None => championships
                .first()
                .and_then(|c| c.team_ids.first().copied()),
        };

        info!(
            "generated {} teams in {} championships",
            teams.len(),
            championships.len()
        );

        Ok(SeasonData::new(teams, championships, human_team_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatabaseLoader;
    use football_core::SeededRandom;

    #[test]
    fn generates_the_bundled_world() {
        let database = DatabaseLoader::load().unwrap();
        let mut rng = SeededRandom::new(10);

        let data = DatabaseGenerator::generate(&database, None, &mut rng).unwrap();

        assert_eq!(data.teams.len(), 16);
        assert_eq!(data.championships.len(), 2);
        assert_eq!(data.human_team_id, Some(1));
        assert!(data.teams.iter().all(|t| t.players.len() == 18));
        assert_eq!(data.championship(1).and_then(|c| c.settings.promotion.as_ref()).map(|p| p.linked_championship_id), Some(2));
    }

    #[test]
    fn rejects_unknown_human_team() {
        let database = DatabaseLoader::load().unwrap();
        let mut rng = SeededRandom::new(10);

        let result = DatabaseGenerator::generate(&database, Some(404), &mut rng);

        assert_eq!(result.err(), Some("unknown human team 404".to_string()));
    }

    #[test]
    fn new_game_plays_whole_seasons_on_the_clock_loop() {
        let database = DatabaseLoader::load().unwrap();
        let mut rng = SeededRandom::new(10);
        let mut data = DatabaseGenerator::generate(&database, None, &mut rng).unwrap();

        for season in 0..2 {
            if !data.is_season_started() || data.is_season_finished() {
                data.start_season(&mut rng).unwrap();
            }

            let mut iterations = 0;
            while !data.is_season_finished() {
                iterations += 1;
                assert!(iterations <= 40, "season {} never finishes", season);

                data.start_round(&mut rng);
                let watched = data.watched_match_day().unwrap().map(|mut day| {
                    while day.next_minute().is_some() {
                        day.tick(&mut rng);
                    }
                    day
                });
                data.finish_round(watched, &mut rng).unwrap();
            }

            // Premier Division: 14 league rounds, then 6 in groups of four
            assert_eq!(data.round, 20);
            assert!(data.championships.iter().all(|c| c.round > 0));

            data.end_season(&mut rng).unwrap();
        }

        assert!(data.championships.iter().all(|c| c.team_ids.len() == 8));
    }
}
