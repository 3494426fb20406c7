//! Gravity scheduler - turns elapsed wall time into `Tick` commands
//!
//! The timer owns no game state. It feeds [`Command::Tick`] into
//! [`GameSession::apply`], the same entry point used by input and tests, so a
//! live clock and a test harness issuing ticks by hand behave identically.
//!
//! - The period follows the session's level. A level change (or a reset)
//!   replaces the schedule: the accumulator restarts at the new period.
//! - While the session is paused or over the accumulator is held at zero, so
//!   resuming starts a full period.

use crate::game_state::{GameSession, SessionState};
use crate::scoring::gravity_interval_ms;
use crate::types::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravityTimer {
    level: u32,
    episode_id: u32,
    interval_ms: u32,
    elapsed_ms: u32,
}

impl GravityTimer {
    /// Timer scheduled for the session's current level
    pub fn new(session: &GameSession) -> Self {
        let mut timer = Self {
            level: 0,
            episode_id: 0,
            interval_ms: 0,
            elapsed_ms: 0,
        };
        timer.reschedule(session);
        timer
    }

    /// Current period in milliseconds
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Time accumulated toward the next tick
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Drop the pending schedule and start a fresh one for the session
    pub fn reschedule(&mut self, session: &GameSession) {
        self.level = session.level();
        self.episode_id = session.episode_id();
        self.interval_ms = gravity_interval_ms(self.level);
        self.elapsed_ms = 0;
    }

    /// Advance the clock by `elapsed_ms`, ticking the session for every full
    /// period that elapses. Returns the number of ticks delivered.
    pub fn advance(&mut self, elapsed_ms: u32, session: &mut GameSession) -> u32 {
        let mut budget = elapsed_ms;
        let mut fired = 0;

        loop {
            if session.level() != self.level || session.episode_id() != self.episode_id {
                self.reschedule(session);
            }

            if matches!(
                session.state(),
                SessionState::Paused | SessionState::GameOver
            ) {
                self.elapsed_ms = 0;
                return fired;
            }

            let until_due = self.interval_ms.saturating_sub(self.elapsed_ms);
            if budget < until_due {
                self.elapsed_ms += budget;
                return fired;
            }

            budget -= until_due;
            self.elapsed_ms = 0;
            session.apply(Command::Tick);
            fired += 1;
        }
    }
}
