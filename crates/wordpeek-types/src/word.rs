use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleSentence {
    pub text: String,
}

/// A word from the word list, together with the sentences it was seen in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub token: String,
    #[serde(default)]
    pub sentences: Vec<ExampleSentence>,
}

impl Word {
    pub fn new(token: impl Into<String>, sentences: &[&str]) -> Self {
        Self {
            token: token.into(),
            sentences: sentences
                .iter()
                .map(|text| ExampleSentence {
                    text: text.to_string(),
                })
                .collect(),
        }
    }
}

/// Shape of the word-list file (`{ "words": [...] }`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordList {
    pub words: Vec<Word>,
}
