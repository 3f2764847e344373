use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::fireworks::Fireworks;
use crate::models::{Advance, FactTable, Outcome, RegionId, Screen, SessionEvent};
use crate::schedule::{AppMessage, Effect};
use crate::session::Session;

const MAX_INPUT_LENGTH: usize = 40;

const READY_MESSAGE: &str = "Ready? Let's learn some capitals!";
const PROMPT_MESSAGE: &str = "What is the capital of this region?";

/// Colour family of the feedback line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Positive,
    Negative,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackLine {
    pub text: String,
    pub tone: Tone,
}

impl FeedbackLine {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// Contents of the facts popup for the current region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactsView<'a> {
    pub region: &'a str,
    pub capital: &'a str,
    pub flower: &'a str,
    pub bird: &'a str,
}

/// Presentation adapter: turns key presses into session calls and session
/// events into view state.
pub struct App {
    pub screen: Screen,
    session: Session,
    generation: u64,
    input: String,
    feedback: FeedbackLine,
    advance_pending: bool,
    show_facts: bool,
    fireworks: Option<Fireworks>,
}

impl App {
    pub fn new(session: Session) -> Self {
        Self {
            screen: Screen::Welcome,
            session,
            generation: 0,
            input: String::new(),
            feedback: FeedbackLine::new(READY_MESSAGE, Tone::Neutral),
            advance_pending: false,
            show_facts: false,
            fireworks: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn table(&self) -> &FactTable {
        self.session.table()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn feedback(&self) -> &FeedbackLine {
        &self.feedback
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_advance_pending(&self) -> bool {
        self.advance_pending
    }

    pub fn is_showing_facts(&self) -> bool {
        self.show_facts
    }

    pub fn fireworks(&self) -> Option<&Fireworks> {
        self.fireworks.as_ref()
    }

    pub fn current_region_name(&self) -> Option<&str> {
        self.session
            .current_region()
            .map(|region| self.table().name_of(region))
    }

    pub fn start_quiz(&mut self) -> Effect {
        self.screen = Screen::Quiz;
        self.feedback = FeedbackLine::new(PROMPT_MESSAGE, Tone::Neutral);
        self.next_prompt()
    }

    pub fn submit_answer(&mut self) -> Effect {
        if self.advance_pending {
            return Effect::None;
        }
        let event = self.session.submit(&self.input);
        self.apply(event)
    }

    pub fn skip(&mut self) -> Effect {
        if self.advance_pending {
            return Effect::None;
        }
        let event = self.session.skip();
        self.apply(event)
    }

    /// Start over with a fresh session on the quiz screen.
    pub fn restart(&mut self) -> Effect {
        self.session = self.session.fresh();
        self.generation += 1;
        self.input.clear();
        self.advance_pending = false;
        self.show_facts = false;
        self.fireworks = None;
        self.start_quiz()
    }

    pub fn toggle_facts(&mut self) {
        self.show_facts = !self.show_facts;
    }

    pub fn close_facts(&mut self) {
        self.show_facts = false;
    }

    /// Facts for the popup; `None` when no region is on screen.
    pub fn facts(&self) -> Option<FactsView<'_>> {
        let region = self.session.current_region()?;
        Some(self.facts_for(region))
    }

    fn facts_for(&self, region: RegionId) -> FactsView<'_> {
        let table = self.table();
        let secondary = table.secondary_facts_of(region);
        FactsView {
            region: table.name_of(region),
            capital: table.capital_of(region),
            flower: secondary.flower,
            bird: secondary.bird,
        }
    }

    pub fn input_push(&mut self, c: char) {
        if self.input.chars().count() < MAX_INPUT_LENGTH {
            self.input.push(c);
        }
    }

    pub fn input_pop(&mut self) {
        self.input.pop();
    }

    /// Handle a timer message; messages from an earlier generation are dropped.
    pub fn on_message(&mut self, msg: AppMessage) -> Effect {
        match msg {
            AppMessage::Advance { generation } if generation == self.generation => {
                if self.advance_pending {
                    self.feedback = FeedbackLine::new(PROMPT_MESSAGE, Tone::Neutral);
                    self.next_prompt()
                } else {
                    Effect::None
                }
            }
            AppMessage::FireworksFrame { generation } if generation == self.generation => {
                if let Some(fireworks) = &mut self.fireworks {
                    fireworks.tick();
                }
                Effect::None
            }
            _ => Effect::None,
        }
    }

    fn next_prompt(&mut self) -> Effect {
        let event = self.session.next();
        self.apply(event)
    }

    fn apply(&mut self, event: SessionEvent) -> Effect {
        match event {
            // Feedback from an immediate advance stays visible under the new prompt.
            SessionEvent::Prompt(_) => {
                self.input.clear();
                self.advance_pending = false;
                self.show_facts = false;
                Effect::None
            }
            SessionEvent::Feedback { feedback, advance } => {
                let tone = match feedback.outcome {
                    Outcome::Correct => Tone::Positive,
                    Outcome::Incorrect | Outcome::Skipped => Tone::Negative,
                    Outcome::EmptyInput => Tone::Warning,
                };
                self.feedback = FeedbackLine::new(feedback.message(self.table()), tone);

                match advance {
                    Advance::Stay => Effect::None,
                    Advance::Now => self.next_prompt(),
                    Advance::After(delay) => {
                        self.advance_pending = true;
                        Effect::ScheduleAdvance {
                            generation: self.generation,
                            delay,
                        }
                    }
                }
            }
            SessionEvent::Completed => {
                self.screen = Screen::Finished;
                self.advance_pending = false;
                self.show_facts = false;
                self.fireworks = Some(Fireworks::new(StdRng::from_entropy()));
                Effect::StartFireworks {
                    generation: self.generation,
                }
            }
            SessionEvent::Ignored => Effect::None,
        }
    }
}
