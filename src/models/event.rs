use std::time::Duration;

use super::fact_table::{FactTable, RegionId};

/// How an answer attempt was judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
    /// The user gave up on the prompt; counters untouched.
    Skipped,
    /// Blank submission, rejected before any counter moved.
    EmptyInput,
}

/// Feedback for the region that was current when the action happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub outcome: Outcome,
    pub region: RegionId,
    pub expected: String,
}

impl Feedback {
    /// Text shown to the player.
    pub fn message(&self, table: &FactTable) -> String {
        let region = table.name_of(self.region);
        match self.outcome {
            Outcome::Correct => format!("Correct! The capital of {} is {}.", region, self.expected),
            Outcome::Incorrect => {
                format!("Not quite. The capital of {} is {}.", region, self.expected)
            }
            Outcome::Skipped => format!("Skipped! The capital of {} is {}.", region, self.expected),
            Outcome::EmptyInput => "Type your answer in the box first".to_string(),
        }
    }
}

/// When the shell should call `next()` again after a piece of feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Keep the current prompt (the input was rejected).
    Stay,
    Now,
    After(Duration),
}

/// Everything the session tells its presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A new region is on screen and awaits an answer.
    Prompt(RegionId),
    Feedback { feedback: Feedback, advance: Advance },
    /// Every region has been answered correctly; fires once per session.
    Completed,
    /// The call had no effect in the current state.
    Ignored,
}
