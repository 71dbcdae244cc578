pub mod cache;
pub mod controller;
pub mod fetch;
pub mod resolver;
pub mod state;
pub mod words;

#[cfg(test)]
mod testing;

pub use cache::{CacheStats, FetchCompletion, FetchDecision, WordInfoCache};
pub use controller::SelectionController;
pub use fetch::{FetchError, WordInfoFetcher};
pub use resolver::effective_pos;
pub use state::SelectionState;
pub use words::{WordListError, load_word_list, normalize_token, parse_word_list};
