//! Recording practice state machine and pronunciation grades.
//!
//! [`PracticeMachine`] drives every "record, wait, show result" flow in the
//! app. A recording attempt is identified by its cycle number; timer
//! callbacks carry the cycle they were armed for, and events for any cycle
//! other than the current one are rejected. This keeps a late timer from a
//! previous attempt from overwriting the result of the current one.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

// ============================================================================
// Grades
// ============================================================================

/// Per-word pronunciation grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WordGrade {
    Excellent,
    Good,
    NeedsPractice,
}

impl WordGrade {
    /// Bucket a uniform sample in `[0, 1)`: 40% excellent, 40% good, 20% needs practice.
    pub fn from_sample(p: f64) -> Self {
        if p < 0.4 {
            WordGrade::Excellent
        } else if p < 0.8 {
            WordGrade::Good
        } else {
            WordGrade::NeedsPractice
        }
    }

    /// Displayed accuracy percentage.
    pub fn accuracy(&self) -> u8 {
        match self {
            WordGrade::Excellent => 95,
            WordGrade::Good => 78,
            WordGrade::NeedsPractice => 45,
        }
    }

    /// Whether the word counts as recorded.
    pub fn is_passing(&self) -> bool {
        matches!(self, WordGrade::Excellent | WordGrade::Good)
    }

    /// Overlay headline shown right after grading.
    pub fn headline(&self) -> &'static str {
        match self {
            WordGrade::Excellent => "Excellent pronunciation!",
            WordGrade::Good => "Good job! Keep practicing!",
            WordGrade::NeedsPractice => "Let's try again! Practice makes perfect!",
        }
    }

    /// Score card line shown once the overlay is gone.
    pub fn card_line(&self) -> &'static str {
        match self {
            WordGrade::Excellent => "Excellent! Perfect pronunciation!",
            WordGrade::Good => "Good job! Keep practicing!",
            WordGrade::NeedsPractice => "Try again! Practice makes perfect!",
        }
    }

    /// IELTS speaking band for this grade.
    pub fn band(&self) -> f32 {
        match self {
            WordGrade::Excellent => 8.0,
            WordGrade::Good => 6.5,
            WordGrade::NeedsPractice => 5.0,
        }
    }
}

impl fmt::Display for WordGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WordGrade::Excellent => "excellent",
            WordGrade::Good => "good",
            WordGrade::NeedsPractice => "needs practice",
        };
        f.write_str(label)
    }
}

/// Lowest and highest passage score the scorer produces.
pub const PASSAGE_SCORE_RANGE: std::ops::RangeInclusive<u8> = 70..=99;

/// Feedback line for a whole-passage score.
pub fn passage_feedback(score: u8) -> &'static str {
    if score >= 90 {
        "Excellent pronunciation! You spoke clearly and confidently."
    } else if score >= 80 {
        "Great job! Your pronunciation is very good. Keep practicing!"
    } else {
        "Good effort! Try to speak a bit more clearly next time."
    }
}

// ============================================================================
// State machine
// ============================================================================

/// Identifies one recording attempt.
pub type Cycle = u64;

/// Tagged practice state.
#[derive(Debug, Clone, PartialEq)]
pub enum PracticeState<O> {
    Idle,
    Recording { cycle: Cycle },
    Processing { cycle: Cycle },
    Result { cycle: Cycle, outcome: O },
}

impl<O> PracticeState<O> {
    fn name(&self) -> &'static str {
        match self {
            PracticeState::Idle => "idle",
            PracticeState::Recording { .. } => "recording",
            PracticeState::Processing { .. } => "processing",
            PracticeState::Result { .. } => "result",
        }
    }

    /// Cycle of the attempt in progress, if any.
    pub fn cycle(&self) -> Option<Cycle> {
        match self {
            PracticeState::Idle => None,
            PracticeState::Recording { cycle }
            | PracticeState::Processing { cycle }
            | PracticeState::Result { cycle, .. } => Some(*cycle),
        }
    }
}

/// Events accepted by [`PracticeMachine`].
#[derive(Debug, Clone, PartialEq)]
pub enum PracticeEvent<O> {
    /// Begin a new attempt (from idle or a shown result)
    Start,
    /// Stop recording; the attempt moves to processing
    Stop,
    /// A score arrived for `cycle`
    Scored { cycle: Cycle, outcome: O },
    /// Hide the result of `cycle`
    Dismiss { cycle: Cycle },
    /// Drop whatever is in progress
    Reset,
}

impl<O> PracticeEvent<O> {
    fn name(&self) -> &'static str {
        match self {
            PracticeEvent::Start => "start",
            PracticeEvent::Stop => "stop",
            PracticeEvent::Scored { .. } => "scored",
            PracticeEvent::Dismiss { .. } => "dismiss",
            PracticeEvent::Reset => "reset",
        }
    }
}

/// Rejected practice events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PracticeError {
    #[error("cannot {event} while {state}")]
    InvalidTransition {
        state: &'static str,
        event: &'static str,
    },

    #[error("stale {event} for cycle {got} (current {current:?})")]
    StaleCycle {
        event: &'static str,
        got: Cycle,
        current: Option<Cycle>,
    },
}

/// Recording state machine with cycle tracking.
#[derive(Debug, Clone)]
pub struct PracticeMachine<O> {
    state: PracticeState<O>,
    last_cycle: Cycle,
}

impl<O> Default for PracticeMachine<O> {
    fn default() -> Self {
        Self {
            state: PracticeState::Idle,
            last_cycle: 0,
        }
    }
}

impl<O: Clone + fmt::Debug> PracticeMachine<O> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PracticeState<O> {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, PracticeState::Idle)
    }

    pub fn is_recording(&self) -> bool {
        matches!(self.state, PracticeState::Recording { .. })
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.state, PracticeState::Processing { .. })
    }

    /// Outcome currently on display.
    pub fn outcome(&self) -> Option<&O> {
        match &self.state {
            PracticeState::Result { outcome, .. } => Some(outcome),
            _ => None,
        }
    }

    /// Cycle of the attempt in progress.
    pub fn cycle(&self) -> Option<Cycle> {
        self.state.cycle()
    }

    /// Apply `event`, returning the new state.
    ///
    /// On error the state is unchanged.
    pub fn apply(&mut self, event: PracticeEvent<O>) -> Result<&PracticeState<O>, PracticeError> {
        let next = match (&self.state, event) {
            (_, PracticeEvent::Reset) => PracticeState::Idle,

            (PracticeState::Idle | PracticeState::Result { .. }, PracticeEvent::Start) => {
                self.last_cycle += 1;
                PracticeState::Recording {
                    cycle: self.last_cycle,
                }
            }

            (PracticeState::Recording { cycle }, PracticeEvent::Stop) => {
                PracticeState::Processing { cycle: *cycle }
            }

            (PracticeState::Processing { cycle }, PracticeEvent::Scored { cycle: got, outcome }) => {
                if *cycle != got {
                    return Err(self.stale("scored", got));
                }
                PracticeState::Result { cycle: got, outcome }
            }

            (PracticeState::Result { cycle, .. }, PracticeEvent::Dismiss { cycle: got }) => {
                if *cycle != got {
                    return Err(self.stale("dismiss", got));
                }
                PracticeState::Idle
            }

            (_, event @ (PracticeEvent::Scored { .. } | PracticeEvent::Dismiss { .. })) => {
                let got = match &event {
                    PracticeEvent::Scored { cycle, .. } | PracticeEvent::Dismiss { cycle } => *cycle,
                    _ => 0,
                };
                if self.state.cycle() != Some(got) {
                    return Err(self.stale(event.name(), got));
                }
                return Err(self.invalid(event.name()));
            }

            (_, event) => return Err(self.invalid(event.name())),
        };

        tracing::debug!(from = self.state.name(), to = next.name(), "practice transition");
        self.state = next;
        Ok(&self.state)
    }

    fn invalid(&self, event: &'static str) -> PracticeError {
        tracing::warn!(state = self.state.name(), event, "rejected practice event");
        PracticeError::InvalidTransition {
            state: self.state.name(),
            event,
        }
    }

    fn stale(&self, event: &'static str, got: Cycle) -> PracticeError {
        tracing::debug!(event, got, current = ?self.state.cycle(), "stale practice event");
        PracticeError::StaleCycle {
            event,
            got,
            current: self.state.cycle(),
        }
    }
}
