use std::collections::BTreeMap;

use serde::Deserialize;
use wordpeek_core::FetchError;
use wordpeek_types::{Explanation, PartOfSpeech, WordInfoRecord};

/// Response body of `GET /words/{token}`
#[derive(Debug, Deserialize)]
pub(crate) struct WordInfoPayload {
    #[serde(default)]
    info: BTreeMap<String, Option<Vec<ExplanationPayload>>>,
    attribution_url: String,
    attribution_text: String,
}

#[derive(Debug, Deserialize)]
struct ExplanationPayload {
    definition: String,
}

impl WordInfoPayload {
    pub(crate) fn from_slice(body: &[u8]) -> Result<Self, FetchError> {
        serde_json::from_slice(body).map_err(|e| FetchError::MalformedPayload(e.to_string()))
    }

    /// Unknown POS keys are skipped; `null` counts as absent
    pub(crate) fn into_record(self) -> WordInfoRecord {
        let mut info_by_pos = BTreeMap::new();

        for (key, explanations) in self.info {
            let Ok(pos) = key.parse::<PartOfSpeech>() else {
                tracing::debug!("Skipping unknown part of speech '{}'", key);
                continue;
            };
            if let Some(explanations) = explanations {
                let set = explanations
                    .into_iter()
                    .map(|e| Explanation {
                        definition: e.definition,
                    })
                    .collect();
                info_by_pos.insert(pos, set);
            }
        }

        WordInfoRecord {
            info_by_pos,
            attribution_url: self.attribution_url,
            attribution_text: self.attribution_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_into_record() {
        let body = br#"{
            "info": {
                "noun": [{ "definition": "the end of the arm" }, { "definition": "a worker" }],
                "verb": null,
                "adj": [],
                "interjection": [{ "definition": "ignored" }]
            },
            "attribution_url": "https://wordnet.example/",
            "attribution_text": "WordNet"
        }"#;

        let record = WordInfoPayload::from_slice(body).unwrap().into_record();

        assert_eq!(record.explanations(PartOfSpeech::Noun).unwrap().len(), 2);
        assert!(!record.has(PartOfSpeech::Verb));
        assert!(record.has(PartOfSpeech::Adjective));
        assert!(!record.has(PartOfSpeech::Adverb));
        assert_eq!(record.info_by_pos.len(), 2);
        assert_eq!(record.attribution_text, "WordNet");
    }

    #[test]
    fn test_missing_attribution_is_malformed() {
        let err = WordInfoPayload::from_slice(br#"{ "info": {} }"#).unwrap_err();
        assert!(matches!(err, FetchError::MalformedPayload(_)));
    }
}
