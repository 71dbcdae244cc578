use crate::record::PartOfSpeech;
use crate::word::Word;

/// What the user is currently looking at
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub word: Option<Word>,
    /// `None` means the tab is derived, not chosen
    pub part_of_speech: Option<PartOfSpeech>,
}

/// The only inputs the presentation layer sends back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SelectWord(Word),
    SelectPartOfSpeech(PartOfSpeech),
    Back,
}
