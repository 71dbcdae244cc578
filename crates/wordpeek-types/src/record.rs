use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Part-of-speech tab. Declaration order is the default-tab priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    #[serde(rename = "noun")]
    Noun,
    #[serde(rename = "verb")]
    Verb,
    #[serde(rename = "adj", alias = "adjective")]
    Adjective,
    #[serde(rename = "adv", alias = "adverb")]
    Adverb,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    /// Short label shown on the tab header
    pub fn label(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adj",
            PartOfSpeech::Adverb => "adv",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown part of speech: {0}")]
pub struct ParsePartOfSpeechError(pub String);

impl FromStr for PartOfSpeech {
    type Err = ParsePartOfSpeechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "noun" => Ok(PartOfSpeech::Noun),
            "verb" => Ok(PartOfSpeech::Verb),
            "adj" | "adjective" => Ok(PartOfSpeech::Adjective),
            "adv" | "adverb" => Ok(PartOfSpeech::Adverb),
            _ => Err(ParsePartOfSpeechError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub definition: String,
}

pub type ExplanationSet = Vec<Explanation>;

/// Linguistic data fetched for one token. Never mutated once stored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WordInfoRecord {
    /// Absent codes have no entry
    pub info_by_pos: BTreeMap<PartOfSpeech, ExplanationSet>,
    pub attribution_url: String,
    pub attribution_text: String,
}

impl WordInfoRecord {
    pub fn explanations(&self, pos: PartOfSpeech) -> Option<&ExplanationSet> {
        self.info_by_pos.get(&pos)
    }

    pub fn has(&self, pos: PartOfSpeech) -> bool {
        self.info_by_pos.contains_key(&pos)
    }
}
