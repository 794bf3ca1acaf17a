//! Held-key tracking for terminal environments.
//!
//! Many terminals only report key presses (plus auto-repeat), never releases.
//! In that mode a key counts as held until no press or repeat has been seen
//! for the release timeout. As soon as one release event arrives the terminal
//! is known to report them and the timeout is switched off.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::key_action;
use crate::types::{Action, MoveInput};

// Long enough to bridge the usual delay before terminal auto-repeat kicks in,
// otherwise a held key would stutter once after the first press.
const DEFAULT_RELEASE_TIMEOUT_MS: u64 = 550;

#[derive(Debug, Clone)]
pub struct HeldKeys {
    keys: ArrayVec<(Action, Instant), 4>,
    release_timeout: Duration,
    reports_release: bool,
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl HeldKeys {
    pub fn new() -> Self {
        Self {
            keys: ArrayVec::new(),
            release_timeout: Duration::from_millis(DEFAULT_RELEASE_TIMEOUT_MS),
            reports_release: false,
        }
    }

    pub fn with_release_timeout(mut self, timeout: Duration) -> Self {
        self.release_timeout = timeout;
        self
    }

    /// Treat the terminal as one that reports releases from the start.
    pub fn with_release_events(mut self) -> Self {
        self.reports_release = true;
        self
    }

    pub fn release_timeout(&self) -> Duration {
        self.release_timeout
    }

    pub fn reports_release(&self) -> bool {
        self.reports_release
    }

    /// Feed one key event. Returns true if it was a movement key.
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) -> bool {
        let Some(action) = key_action(key.code) else {
            return false;
        };
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(action, now),
            KeyEventKind::Release => {
                self.reports_release = true;
                self.release(action);
            }
        }
        true
    }

    pub fn press(&mut self, action: Action, now: Instant) {
        if let Some(entry) = self.keys.iter_mut().find(|(a, _)| *a == action) {
            entry.1 = now;
        } else {
            // At most one entry per action, so capacity 4 always suffices.
            self.keys.push((action, now));
        }
    }

    pub fn release(&mut self, action: Action) {
        self.keys.retain(|(a, _)| *a != action);
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Drop keys that timed out, then report what is still held.
    pub fn update(&mut self, now: Instant) -> MoveInput {
        if !self.reports_release {
            let timeout = self.release_timeout;
            self.keys
                .retain(|(_, last)| now.saturating_duration_since(*last) <= timeout);
        }
        self.current()
    }

    /// Held keys without expiring anything.
    pub fn current(&self) -> MoveInput {
        self.keys.iter().map(|(a, _)| *a).collect()
    }
}
