//! Typing animation state machine
//!
//! Cycles through a script of strings: types each one character by
//! character, holds it, deletes it, then moves to the next string. The
//! machine is pure; a driver waits [`Typewriter::next_delay`] and then calls
//! [`Typewriter::tick`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::entities::DEFAULT_SUBTITLES;

/// Delay before each typed character
pub const TYPE_DELAY_MS: u64 = 100;
/// Dwell on a fully typed string before deleting
pub const PAUSE_MS: u64 = 2000;
/// Delay before each deleted character
pub const DELETE_DELAY_MS: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Typing,
    Pausing,
    Deleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTimings {
    pub type_delay: Duration,
    pub pause: Duration,
    pub delete_delay: Duration,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(TYPE_DELAY_MS),
            pause: Duration::from_millis(PAUSE_MS),
            delete_delay: Duration::from_millis(DELETE_DELAY_MS),
        }
    }
}

/// What the animation shows after a tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub text: String,
    pub index: usize,
    pub phase: Phase,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    script: Vec<Vec<char>>,
    index: usize,
    shown: usize,
    phase: Phase,
    timings: TypingTimings,
}

impl Typewriter {
    /// Create a typewriter over `script`
    ///
    /// An empty script is replaced by [`DEFAULT_SUBTITLES`].
    pub fn new(script: Vec<String>, timings: TypingTimings) -> Self {
        let script: Vec<Vec<char>> = if script.is_empty() {
            DEFAULT_SUBTITLES.iter().map(|s| s.chars().collect()).collect()
        } else {
            script.iter().map(|s| s.chars().collect()).collect()
        };

        Self {
            script,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            timings,
        }
    }

    pub fn with_default_timings(script: Vec<String>) -> Self {
        Self::new(script, TypingTimings::default())
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn script_len(&self) -> usize {
        self.script.len()
    }

    /// Currently displayed prefix
    pub fn text(&self) -> String {
        self.current()[..self.shown].iter().collect()
    }

    pub fn frame(&self) -> Frame {
        Frame {
            text: self.text(),
            index: self.index,
            phase: self.phase,
        }
    }

    /// How long to wait before the next [`tick`](Self::tick)
    pub fn next_delay(&self) -> Duration {
        match self.phase {
            Phase::Typing => self.timings.type_delay,
            Phase::Pausing => self.timings.pause,
            Phase::Deleting => self.timings.delete_delay,
        }
    }

    /// Advance one step and return the new frame
    pub fn tick(&mut self) -> Frame {
        match self.phase {
            Phase::Typing => {
                let len = self.current().len();
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.phase = Phase::Pausing;
                }
            }
            Phase::Pausing => {
                self.phase = Phase::Deleting;
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.script.len();
                    self.phase = Phase::Typing;
                }
            }
        }
        self.frame()
    }

    /// Time one full pass over the script takes
    pub fn cycle_duration(&self) -> Duration {
        self.script
            .iter()
            .map(|entry| {
                // An empty entry still costs one typing tick and one deleting tick.
                let ticks = u32::try_from(entry.len()).unwrap_or(u32::MAX).max(1);
                self.timings
                    .type_delay
                    .saturating_mul(ticks)
                    .saturating_add(self.timings.pause)
                    .saturating_add(self.timings.delete_delay.saturating_mul(ticks))
            })
            .fold(Duration::ZERO, Duration::saturating_add)
    }

    fn current(&self) -> &[char] {
        &self.script[self.index]
    }
}
