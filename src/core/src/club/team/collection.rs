use crate::club::Team;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamCollection {
    pub teams: Vec<Team>,
}

impl TeamCollection {
    pub fn new(teams: Vec<Team>) -> Self {
        TeamCollection { teams }
    }

    pub fn by_id(&self, id: u32) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.teams.iter().any(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: u32, name: &str) -> Team {
        Team::builder()
            .id(id)
            .name(name.to_string())
            .players(Vec::new())
            .build()
            .unwrap()
    }

    #[test]
    fn lookup_by_id() {
        let collection = TeamCollection::new(vec![team(1, "Alpha"), team(2, "Beta")]);

        assert_eq!(collection.by_id(2).map(|t| t.name.as_str()), Some("Beta"));
        assert!(collection.contains(1));
        assert!(collection.by_id(5).is_none());
        assert!(!collection.contains(5));
    }
}
