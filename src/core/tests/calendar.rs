use football_core::{ScheduleGenerator, SeededRandom};
use std::collections::{HashMap, HashSet};

#[test]
fn every_pair_meets_twice_with_reversed_venues() {
    for size in [2u32, 4, 6, 8, 10, 16] {
        let ids: Vec<u32> = (1..=size).collect();
        let mut rng = SeededRandom::new(size as u64);

        let calendar = ScheduleGenerator::generate("c", &ids, &mut rng).unwrap();

        assert_eq!(calendar.len(), (2 * size - 2) as usize);

        let mut meetings: HashMap<(u32, u32), Vec<(u32, u32)>> = HashMap::new();

        for round in &calendar {
            assert_eq!(round.matches.len(), (size / 2) as usize);

            let mut seen = HashSet::new();
            for m in &round.matches {
                assert!(seen.insert(m.home_team_id));
                assert!(seen.insert(m.away_team_id));

                let key = (m.home_team_id.min(m.away_team_id), m.home_team_id.max(m.away_team_id));
                meetings.entry(key).or_default().push((m.home_team_id, m.away_team_id));
            }
        }

        assert_eq!(meetings.len(), (size * (size - 1) / 2) as usize);

        for venues in meetings.values() {
            assert_eq!(venues.len(), 2);
            assert_eq!(venues[0], (venues[1].1, venues[1].0));
        }
    }
}

#[test]
fn rounds_are_numbered_in_order() {
    let ids: Vec<u32> = (1..=6).collect();
    let calendar = ScheduleGenerator::generate("c", &ids, &mut SeededRandom::new(1)).unwrap();

    let numbers: Vec<u32> = calendar.iter().map(|r| r.round).collect();
    assert_eq!(numbers, (1..=10).collect::<Vec<u32>>());
    assert!(calendar.iter().flat_map(|r| &r.matches).all(|m| !m.is_played));
}
