mod generators;
mod loaders;
mod session;

pub use generators::*;
pub use loaders::*;
pub use session::*;

pub struct DatabaseEntity {
    pub championships: Vec<ChampionshipEntity>,
    pub teams: Vec<TeamEntity>,
    pub names: PeopleNamesEntity,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> Result<DatabaseEntity, serde_json::Error> {
        Ok(DatabaseEntity {
            championships: ChampionshipLoader::load()?,
            teams: TeamLoader::load()?,
            names: NamesLoader::load()?,
        })
    }
}
