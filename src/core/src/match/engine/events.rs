use crate::r#match::MatchSide;

/// Outward notifications produced while a match is ticking.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum MatchEvent {
    ScorerChanged {
        match_id: String,
        scorer: String,
        minute: u8,
    },
    ScoreIncreased {
        match_id: String,
        side: MatchSide,
    },
}

pub trait MatchEventListener {
    fn on_event(&mut self, event: &MatchEvent);
}

impl MatchEventListener for Vec<MatchEvent> {
    fn on_event(&mut self, event: &MatchEvent) {
        self.push(event.clone());
    }
}

pub struct EventDispatcher;

impl EventDispatcher {
    pub fn dispatch<L: MatchEventListener + ?Sized>(events: &[MatchEvent], listener: &mut L) {
        for event in events {
            listener.on_event(event);
        }
    }
}
