use football_core::{Player, PlayerFieldPositionGroup, Team};

pub fn team(id: u32, strength: u8) -> Team {
    let lines = [
        (PlayerFieldPositionGroup::Goalkeeper, 2),
        (PlayerFieldPositionGroup::Defender, 6),
        (PlayerFieldPositionGroup::Midfielder, 6),
        (PlayerFieldPositionGroup::Forward, 4),
    ];

    let mut players = Vec::new();
    let mut player_id = id * 1000;

    for (position, count) in lines {
        for _ in 0..count {
            players.push(
                Player::builder()
                    .id(player_id)
                    .name(format!("Player {}", player_id))
                    .position(position)
                    .strength(strength)
                    .build()
                    .unwrap(),
            );
            player_id += 1;
        }
    }

    Team::builder()
        .id(id)
        .name(format!("Team {}", id))
        .players(players)
        .build()
        .unwrap()
}
