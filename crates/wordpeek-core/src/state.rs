use wordpeek_types::{PartOfSpeech, Selection, Word};

/// Owns the current selection. Every operation is total.
#[derive(Debug, Default)]
pub struct SelectionState {
    current: Selection,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a word; any explicit tab choice is dropped
    pub fn select_word(&mut self, word: Word) {
        self.current = Selection {
            word: Some(word),
            part_of_speech: None,
        };
    }

    /// Returns false (and changes nothing) when no word is selected
    pub fn select_part_of_speech(&mut self, pos: PartOfSpeech) -> bool {
        if self.current.word.is_none() {
            return false;
        }
        self.current.part_of_speech = Some(pos);
        true
    }

    pub fn clear_selection(&mut self) {
        self.current = Selection::default();
    }

    pub fn current(&self) -> &Selection {
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_word_clears_tab() {
        let mut state = SelectionState::new();
        state.select_word(Word::new("hand", &[]));
        assert!(state.select_part_of_speech(PartOfSpeech::Verb));

        state.select_word(Word::new("hand", &[]));
        assert_eq!(state.current().part_of_speech, None);
    }

    #[test]
    fn test_tab_without_word_is_ignored() {
        let mut state = SelectionState::new();
        assert!(!state.select_part_of_speech(PartOfSpeech::Noun));
        assert_eq!(state.current(), &Selection::default());
    }

    #[test]
    fn test_clear_resets_both_fields() {
        let mut state = SelectionState::new();
        state.select_word(Word::new("see", &[]));
        state.select_part_of_speech(PartOfSpeech::Verb);
        state.clear_selection();
        assert_eq!(state.current(), &Selection::default());
    }
}
