mod loader;
mod us_states;

pub use loader::{LoadError, load_facts_from_json, parse_facts_json};
pub use us_states::us_states;
