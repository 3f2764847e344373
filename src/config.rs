//! Session configuration resolved from the command line.

use std::time::Duration;

use clap::ValueEnum;

/// Pause before the next prompt in endless mode, so the feedback can be read.
pub const ENDLESS_ADVANCE_DELAY: Duration = Duration::from_millis(1200);

/// How `next()` picks the following region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SelectionPolicy {
    /// Draw from every region each time; the quiz never ends.
    #[value(name = "endless")]
    WithRepetition,
    /// Draw only from regions not yet answered correctly; ends when none remain.
    #[value(name = "exhaustion")]
    UntilExhausted,
}

impl SelectionPolicy {
    pub fn label(self) -> &'static str {
        match self {
            SelectionPolicy::WithRepetition => "Endless",
            SelectionPolicy::UntilExhausted => "Until every capital is named",
        }
    }

    pub fn default_advance_delay(self) -> Duration {
        match self {
            SelectionPolicy::WithRepetition => ENDLESS_ADVANCE_DELAY,
            SelectionPolicy::UntilExhausted => Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub policy: SelectionPolicy,
    /// Zero means the next prompt follows feedback immediately.
    pub advance_delay: Duration,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl QuizConfig {
    pub fn for_policy(policy: SelectionPolicy) -> Self {
        Self {
            policy,
            advance_delay: policy.default_advance_delay(),
            seed: None,
        }
    }

    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay = delay;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self::for_policy(SelectionPolicy::UntilExhausted)
    }
}
