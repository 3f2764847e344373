mod event;
mod fact_table;

pub use event::{Advance, Feedback, Outcome, SessionEvent};
pub use fact_table::{FactTable, NOT_AVAILABLE, RegionFacts, RegionId, SecondaryFacts, TableError};

/// Which screen the terminal shell is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Quiz,
    Finished,
}
