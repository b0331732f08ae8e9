use football_core::{EventDispatcher, MatchDay, MatchEventListener, RandomSource};
use log::debug;
use std::time::Duration;
use tokio::sync::watch;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ClockOutcome {
    Completed,
    /// Stopped before `minute` was played.
    Cancelled { minute: u8 },
}

/// Drives a watched match day one minute per interval.
pub struct MatchClock {
    speed: watch::Receiver<Duration>,
    stop: watch::Receiver<bool>,
    stop_open: bool,
}

/// Remote control for a running `MatchClock`.
#[derive(Clone)]
pub struct ClockHandle {
    speed: watch::Sender<Duration>,
    stop: watch::Sender<bool>,
}

impl ClockHandle {
    pub fn set_speed(&self, interval: Duration) {
        self.speed.send_replace(interval);
    }

    pub fn stop(&self) {
        self.stop.send_replace(true);
    }
}

impl MatchClock {
    pub fn new(interval: Duration) -> (MatchClock, ClockHandle) {
        let (speed_tx, speed_rx) = watch::channel(interval);
        let (stop_tx, stop_rx) = watch::channel(false);

        (
            MatchClock {
                speed: speed_rx,
                stop: stop_rx,
                stop_open: true,
            },
            ClockHandle {
                speed: speed_tx,
                stop: stop_tx,
            },
        )
    }

    pub fn is_stopped(&self) -> bool {
        *self.stop.borrow()
    }

    /// Ticks `match_day` until every match is over or the clock is stopped.
    /// A stop request lands between ticks, never inside one.
    pub async fn run<R: RandomSource, L: MatchEventListener + ?Sized>(
        &mut self,
        match_day: &mut MatchDay,
        rng: &mut R,
        listener: &mut L,
    ) -> ClockOutcome {
        while let Some(minute) = match_day.next_minute() {
            if self.is_stopped() {
                debug!("clock stopped before minute {} of round {}", minute, match_day.round);
                return ClockOutcome::Cancelled { minute };
            }

            let events = match_day.tick(rng);
            EventDispatcher::dispatch(&events, listener);

            if match_day.is_finished() {
                break;
            }

            self.wait().await;
        }

        ClockOutcome::Completed
    }

    async fn wait(&mut self) {
        let interval = *self.speed.borrow();

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            changed = self.stop.changed(), if self.stop_open => {
                if changed.is_err() {
                    self.stop_open = false;
                    tokio::time::sleep(interval).await;
                }
            }
        }
    }
}
