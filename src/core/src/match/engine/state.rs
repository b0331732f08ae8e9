use serde::{Deserialize, Serialize};

pub const MATCH_FINAL_MINUTE: u8 = 90;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum MatchState {
    NotStarted,
    InProgress,
    Finished,
}

pub struct StateManager;

impl StateManager {
    /// Minute the match expects next, `None` once it is over.
    pub fn next_minute(state: MatchState, minute: u8) -> Option<u8> {
        match state {
            MatchState::NotStarted => Some(0),
            MatchState::InProgress if minute < MATCH_FINAL_MINUTE => Some(minute + 1),
            MatchState::InProgress | MatchState::Finished => None,
        }
    }

    pub fn state_after(minute: u8) -> MatchState {
        if minute >= MATCH_FINAL_MINUTE {
            MatchState::Finished
        } else {
            MatchState::InProgress
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_manager_next_minute() {
        assert_eq!(StateManager::next_minute(MatchState::NotStarted, 0), Some(0));
        assert_eq!(StateManager::next_minute(MatchState::InProgress, 0), Some(1));
        assert_eq!(StateManager::next_minute(MatchState::InProgress, 89), Some(90));
        assert_eq!(StateManager::next_minute(MatchState::InProgress, 90), None);
        assert_eq!(StateManager::next_minute(MatchState::Finished, 90), None);
    }

    #[test]
    fn test_state_after_minute() {
        assert_eq!(StateManager::state_after(0), MatchState::InProgress);
        assert_eq!(StateManager::state_after(89), MatchState::InProgress);
        assert_eq!(StateManager::state_after(90), MatchState::Finished);
    }
}
