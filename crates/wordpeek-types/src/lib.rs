mod event;
mod record;
mod view;
mod word;

pub use event::{Intent, Selection};
pub use record::{
    Explanation, ExplanationSet, ParsePartOfSpeechError, PartOfSpeech, WordInfoRecord,
};
pub use view::{Attribution, Mode, TabView, ViewModel};
pub use word::{ExampleSentence, Word, WordList};
