//! Quiz session state machine.
//!
//! The session knows nothing about rendering or timing. Every operation
//! returns a [`SessionEvent`] that the presentation layer applies to its own
//! view state; when feedback says [`Advance::After`], the caller is expected
//! to schedule the next `next()` call itself.

use std::collections::BTreeSet;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::config::{QuizConfig, SelectionPolicy};
use crate::models::{Advance, FactTable, Feedback, Outcome, RegionId, SessionEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// No prompt generated yet.
    Idle,
    AwaitingAnswer(RegionId),
    /// Every region answered correctly (exhaustion only). Terminal.
    Finished,
}

/// A single player's run through the quiz.
pub struct Session {
    table: Arc<FactTable>,
    config: QuizConfig,
    rng: StdRng,
    phase: Phase,
    /// Regions `next()` may draw from. Shrinks only under `UntilExhausted`.
    candidates: Vec<RegionId>,
    score: usize,
    total: usize,
    learned: BTreeSet<RegionId>,
}

impl Session {
    pub fn new(table: Arc<FactTable>, config: QuizConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let candidates = table.regions().collect();

        Self {
            table,
            config,
            rng,
            phase: Phase::Idle,
            candidates,
            score: 0,
            total: 0,
            learned: BTreeSet::new(),
        }
    }

    /// A brand-new session over the same table and settings. A seeded session
    /// hands a seed from its own generator to the next one, so replays stay
    /// reproducible without repeating the same order.
    pub fn fresh(&mut self) -> Session {
        let seed = self.config.seed.map(|_| self.rng.r#gen::<u64>());
        Session::new(Arc::clone(&self.table), self.config.clone().with_seed(seed))
    }

    pub fn table(&self) -> &Arc<FactTable> {
        &self.table
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.config.policy
    }

    pub fn current_region(&self) -> Option<RegionId> {
        match self.phase {
            Phase::AwaitingAnswer(region) => Some(region),
            Phase::Idle | Phase::Finished => None,
        }
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// `(score, total)` as shown on the score line.
    pub fn tally(&self) -> (usize, usize) {
        (self.score, self.total)
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Finished without a single wrong answer.
    pub fn is_perfect(&self) -> bool {
        self.is_finished() && self.score == self.total
    }

    /// Regions not yet answered correctly; `None` in endless mode.
    pub fn remaining(&self) -> Option<&[RegionId]> {
        match self.config.policy {
            SelectionPolicy::WithRepetition => None,
            SelectionPolicy::UntilExhausted => Some(&self.candidates),
        }
    }

    /// Regions answered correctly at least once, in table order.
    pub fn learned(&self) -> &BTreeSet<RegionId> {
        &self.learned
    }

    /// Pick the next prompt, or finish if nothing is left to ask.
    pub fn next(&mut self) -> SessionEvent {
        if self.phase == Phase::Finished {
            return SessionEvent::Ignored;
        }

        let Some(&region) = self.candidates.choose(&mut self.rng) else {
            // Only reachable under `UntilExhausted`; endless keeps every region.
            self.phase = Phase::Finished;
            info!(score = self.score, total = self.total, "every region answered");
            return SessionEvent::Completed;
        };

        self.phase = Phase::AwaitingAnswer(region);
        debug!(region = self.table.name_of(region), "next prompt");
        SessionEvent::Prompt(region)
    }

    /// Judge an answer for the current region.
    pub fn submit(&mut self, raw_answer: &str) -> SessionEvent {
        let Phase::AwaitingAnswer(region) = self.phase else {
            return SessionEvent::Ignored;
        };
        let expected = self.table.capital_of(region).to_string();

        let answer = normalize(raw_answer);
        if answer.is_empty() {
            warn!(region = self.table.name_of(region), "empty answer rejected");
            return SessionEvent::Feedback {
                feedback: Feedback {
                    outcome: Outcome::EmptyInput,
                    region,
                    expected,
                },
                advance: Advance::Stay,
            };
        }

        self.total += 1;
        let outcome = if answer == normalize(&expected) {
            self.score += 1;
            self.learned.insert(region);
            if self.config.policy == SelectionPolicy::UntilExhausted {
                self.candidates.retain(|&r| r != region);
            }
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };

        info!(
            region = self.table.name_of(region),
            ?outcome,
            score = self.score,
            total = self.total,
            "answer judged"
        );

        SessionEvent::Feedback {
            feedback: Feedback {
                outcome,
                region,
                expected,
            },
            advance: self.advance(),
        }
    }

    /// Reveal the capital without scoring; the region stays in play.
    pub fn skip(&mut self) -> SessionEvent {
        let Phase::AwaitingAnswer(region) = self.phase else {
            return SessionEvent::Ignored;
        };

        info!(region = self.table.name_of(region), "prompt skipped");
        SessionEvent::Feedback {
            feedback: Feedback {
                outcome: Outcome::Skipped,
                region,
                expected: self.table.capital_of(region).to_string(),
            },
            advance: self.advance(),
        }
    }

    fn advance(&self) -> Advance {
        if self.config.advance_delay.is_zero() {
            Advance::Now
        } else {
            Advance::After(self.config.advance_delay)
        }
    }
}

/// Trim surrounding whitespace and case-fold.
pub fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::data::us_states;
    use crate::models::RegionFacts;

    fn table() -> Arc<FactTable> {
        Arc::new(
            FactTable::new(vec![
                RegionFacts::new("Texas", "Austin"),
                RegionFacts::new("Ohio", "Columbus"),
            ])
            .unwrap(),
        )
    }

    fn session(policy: SelectionPolicy) -> Session {
        Session::new(table(), QuizConfig::for_policy(policy).with_seed(Some(7)))
    }

    fn prompt(session: &mut Session) -> RegionId {
        match session.next() {
            SessionEvent::Prompt(region) => region,
            other => panic!("expected a prompt, got {other:?}"),
        }
    }

    fn outcome(event: SessionEvent) -> Outcome {
        match event {
            SessionEvent::Feedback { feedback, .. } => feedback.outcome,
            other => panic!("expected feedback, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_before_first_prompt_is_ignored() {
        let mut session = session(SelectionPolicy::UntilExhausted);
        assert_eq!(session.current_region(), None);
        assert_eq!(session.submit("Austin"), SessionEvent::Ignored);
        assert_eq!(session.skip(), SessionEvent::Ignored);
        assert_eq!(session.tally(), (0, 0));
    }

    #[test]
    fn test_answers_are_trimmed_and_case_folded() {
        let mut session = session(SelectionPolicy::WithRepetition);
        let region = prompt(&mut session);
        let capital = session.table().capital_of(region).to_string();

        let shouted = format!("  {}  ", capital.to_uppercase());
        assert_eq!(outcome(session.submit(&shouted)), Outcome::Correct);
        assert_eq!(outcome(session.submit(&capital.to_lowercase())), Outcome::Correct);
        assert_eq!(session.tally(), (2, 2));
    }

    #[test]
    fn test_empty_answer_touches_nothing() {
        let mut session = session(SelectionPolicy::UntilExhausted);
        let region = prompt(&mut session);

        let event = session.submit("   \t ");
        match event {
            SessionEvent::Feedback { feedback, advance } => {
                assert_eq!(feedback.outcome, Outcome::EmptyInput);
                assert_eq!(advance, Advance::Stay);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(session.tally(), (0, 0));
        assert_eq!(session.current_region(), Some(region));
        assert_eq!(session.remaining().map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_wrong_answer_keeps_region_in_play() {
        let mut session = session(SelectionPolicy::UntilExhausted);
        let region = prompt(&mut session);

        assert_eq!(outcome(session.submit("Dallas")), Outcome::Incorrect);
        assert_eq!(session.tally(), (0, 1));
        assert!(session.remaining().unwrap().contains(&region));
        assert!(session.learned().is_empty());
    }

    #[test]
    fn test_skip_reveals_without_scoring() {
        let mut session = session(SelectionPolicy::UntilExhausted);
        let region = prompt(&mut session);

        match session.skip() {
            SessionEvent::Feedback { feedback, advance } => {
                assert_eq!(feedback.outcome, Outcome::Skipped);
                assert_eq!(feedback.region, region);
                assert_eq!(feedback.expected, session.table().capital_of(region));
                assert_eq!(advance, Advance::Now);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(session.tally(), (0, 0));
        assert!(session.remaining().unwrap().contains(&region));
    }

    #[test]
    fn test_advance_follows_configured_delay() {
        let mut session = session(SelectionPolicy::WithRepetition);
        prompt(&mut session);
        match session.submit("nope") {
            SessionEvent::Feedback { advance, .. } => {
                assert_eq!(advance, Advance::After(Duration::from_millis(1200)));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_repeated_correct_submit_is_idempotent() {
        let mut session = session(SelectionPolicy::UntilExhausted);
        let region = prompt(&mut session);
        let capital = session.table().capital_of(region).to_string();

        session.submit(&capital);
        session.submit(&capital);
        assert_eq!(session.tally(), (2, 2));
        assert_eq!(session.remaining().unwrap().len(), 1);
        assert!(!session.remaining().unwrap().contains(&region));
    }

    #[test]
    fn test_exhaustion_completes_exactly_once() {
        let mut session = session(SelectionPolicy::UntilExhausted);
        let mut completions = 0;

        for _ in 0..100 {
            match session.next() {
                SessionEvent::Prompt(region) => {
                    let capital = session.table().capital_of(region).to_string();
                    session.submit(&capital);
                }
                SessionEvent::Completed => completions += 1,
                SessionEvent::Ignored => {}
                other => panic!("unexpected {other:?}"),
            }
        }

        assert_eq!(completions, 1);
        assert!(session.is_finished());
        assert!(session.is_perfect());
        assert_eq!(session.current_region(), None);
        assert_eq!(session.submit("Austin"), SessionEvent::Ignored);
        assert_eq!(session.tally(), (2, 2));
    }

    #[test]
    fn test_endless_mode_never_finishes() {
        let mut session = Session::new(
            Arc::new(us_states()),
            QuizConfig::for_policy(SelectionPolicy::WithRepetition).with_seed(Some(3)),
        );

        for _ in 0..200 {
            let region = prompt(&mut session);
            let capital = session.table().capital_of(region).to_string();
            session.submit(&capital);
        }
        assert!(!session.is_finished());
        assert_eq!(session.remaining(), None);
        assert_eq!(session.tally(), (200, 200));
    }

    #[test]
    fn test_score_never_exceeds_total() {
        let mut session = Session::new(
            Arc::new(us_states()),
            QuizConfig::default().with_seed(Some(11)),
        );
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..300 {
            let Some(region) = session.current_region() else {
                if session.next() == SessionEvent::Completed {
                    break;
                }
                continue;
            };
            let capital = session.table().capital_of(region).to_string();
            match rng.gen_range(0..4) {
                0 => session.submit(&capital),
                1 => session.submit("wrong"),
                2 => session.submit(""),
                _ => session.skip(),
            };
            assert!(session.score() <= session.total());
            session.next();
        }
    }

    #[test]
    fn test_seeded_sessions_are_reproducible() {
        let draw = |seed| {
            let mut session = Session::new(
                Arc::new(us_states()),
                QuizConfig::default().with_seed(Some(seed)),
            );
            (0..10)
                .map(|_| prompt(&mut session))
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(42), draw(42));
    }

    #[test]
    fn test_fresh_session_starts_over() {
        let mut session = session(SelectionPolicy::UntilExhausted);
        let region = prompt(&mut session);
        let capital = session.table().capital_of(region).to_string();
        session.submit(&capital);

        let fresh = session.fresh();
        assert_eq!(fresh.tally(), (0, 0));
        assert_eq!(fresh.current_region(), None);
        assert_eq!(fresh.remaining().map(<[_]>::len), Some(2));
        assert!(fresh.learned().is_empty());
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Salt Lake City \n"), "salt lake city");
        assert_eq!(normalize("   "), "");
    }
}
