use football_core::Formation;
use log::warn;
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_CLOCK_SPEED_MS: u64 = 50;
const DEFAULT_SEASONS: u32 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub clock_speed: Duration,
    pub seed: Option<u64>,
    pub human_team_id: Option<u32>,
    pub seasons: u32,
    pub formation: Formation,
    pub session_file: Option<String>,
    pub lineup: Option<LineupIds>,
}

/// Player ids for the human team, written as `starters;substitutes`, each
/// part a comma separated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineupIds {
    pub starters: Vec<u32>,
    pub substitutes: Vec<u32>,
}

impl FromStr for LineupIds {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (starters, substitutes) = value.split_once(';').unwrap_or((value, ""));

        let ids = |part: &str| -> Result<Vec<u32>, String> {
            part.split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(|id| id.parse::<u32>().map_err(|_| format!("bad player id '{}'", id)))
                .collect()
        };

        Ok(LineupIds {
            starters: ids(starters)?,
            substitutes: ids(substitutes)?,
        })
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            clock_speed: Duration::from_millis(DEFAULT_CLOCK_SPEED_MS),
            seed: None,
            human_team_id: None,
            seasons: DEFAULT_SEASONS,
            formation: Formation::default(),
            session_file: None,
            lineup: None,
        }
    }
}

impl SimulationConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let defaults = SimulationConfig::default();

        SimulationConfig {
            clock_speed: Duration::from_millis(parse_or(
                &lookup,
                "CLOCK_SPEED_MS",
                DEFAULT_CLOCK_SPEED_MS,
            )),
            seed: parse_optional(&lookup, "SEED"),
            human_team_id: parse_optional(&lookup, "HUMAN_TEAM"),
            seasons: parse_or(&lookup, "SEASONS", defaults.seasons),
            formation: parse_or(&lookup, "FORMATION", defaults.formation),
            session_file: lookup("SESSION_FILE").filter(|path| !path.trim().is_empty()),
            lineup: parse_optional(&lookup, "LINEUP"),
        }
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(error) => {
                warn!("{}='{}' is invalid ({}), using {}", key, raw, error, default);
                default
            }
        },
        None => default,
    }
}

fn parse_optional<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;

    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(error) => {
            warn!("{}='{}' is invalid ({}), ignored", key, raw, error);
            None
        }
    }
}
