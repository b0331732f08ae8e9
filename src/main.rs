mod clock;
mod config;
mod scoreboard;

use crate::clock::{ClockOutcome, MatchClock};
use crate::config::SimulationConfig;
use crate::scoreboard::Scoreboard;
use color_eyre::eyre::eyre;
use database::{DatabaseGenerator, DatabaseLoader, SessionCodec};
use env_logger::Env;
use football_core::utils::TimeEstimation;
use football_core::{Lineup, SeasonData, SeededRandom};
use log::{info, warn};
use std::time::Duration;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = SimulationConfig::from_env();

    let mut rng = match config.seed {
        Some(seed) => SeededRandom::new(seed),
        None => SeededRandom::from_entropy(),
    };

    let mut data = match restore_session(&config).await {
        Some(data) => data,
        None => {
            let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);
            let database = database?;

            info!("database loaded: {} ms", estimated);

            DatabaseGenerator::generate(&database, config.human_team_id, &mut rng)
                .map_err(|error| eyre!(error))?
        }
    }
    .with_formation(config.formation);

    if let (Some(ids), Some(human)) = (&config.lineup, data.human_team_id) {
        let lineup = Lineup {
            team_id: human,
            starter_ids: ids.starters.clone(),
            substitute_ids: ids.substitutes.clone(),
        };

        match data.set_human_lineup(Some(lineup)) {
            Ok(()) => info!("👤 hand-picked lineup for team {}", human),
            Err(error) => warn!("LINEUP ignored: {}", error),
        }
    }

    let human_team = data.human_team_id.and_then(|id| data.teams.by_id(id));
    if let (Some(team), Some(championship)) = (human_team, data.human_championship()) {
        info!("👤 managing {} in {}", team.name, championship.name());
    }

    let (mut clock, handle) = MatchClock::new(config.clock_speed);

    // First ctrl-c fast-forwards, the second one stops
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("⏩ fast-forward, press ctrl-c again to stop");
            handle.set_speed(Duration::ZERO);
        }
        if tokio::signal::ctrl_c().await.is_ok() {
            handle.stop();
        }
    });

    for _ in 0..config.seasons {
        if !data.is_season_started() || data.is_season_finished() {
            data.start_season(&mut rng)?;
        }

        while !data.is_season_finished() {
            data.start_round(&mut rng);

            let watched = match data.watched_match_day()? {
                Some(mut match_day) => {
                    let mut scoreboard = Scoreboard::watch(&match_day);

                    match clock.run(&mut match_day, &mut rng, &mut scoreboard).await {
                        ClockOutcome::Completed => Some(match_day),
                        ClockOutcome::Cancelled { minute } => {
                            warn!(
                                "simulation stopped at minute {} of round {}",
                                minute, match_day.round
                            );
                            return save_session(&config, &data).await;
                        }
                    }
                }
                None => None,
            };

            data.finish_round(watched, &mut rng)?;
            save_session(&config, &data).await?;
        }

        data.end_season(&mut rng)?;
        save_session(&config, &data).await?;
    }

    Ok(())
}

async fn restore_session(config: &SimulationConfig) -> Option<SeasonData> {
    let path = config.session_file.as_ref()?;

    let json = match tokio::fs::read_to_string(path).await {
        Ok(json) => json,
        Err(error) => {
            info!("no session restored from {}: {}", path, error);
            return None;
        }
    };

    match SessionCodec::decode(&json) {
        Some(data) => {
            info!("session restored from {}: {} round {}", path, data.year, data.round);
            Some(data)
        }
        None => {
            warn!("session file {} is unreadable, starting a new game", path);
            None
        }
    }
}

async fn save_session(config: &SimulationConfig, data: &SeasonData) -> color_eyre::Result<()> {
    if let Some(path) = &config.session_file {
        tokio::fs::write(path, SessionCodec::encode(data)?).await?;
    }

    Ok(())
}
