use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use unicode_normalization::UnicodeNormalization;
use wordpeek_types::{Word, WordList};

#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Canonical form of a token: trimmed, NFKC, no line breaks
pub fn normalize_token(token: &str) -> String {
    let token = token.trim();
    if token.is_empty() {
        return String::new();
    }

    let token: String = token.nfkc().collect();
    token.replace(['\n', '\r'], "").trim().to_string()
}

/// Load the word list shown in list mode
pub fn load_word_list(path: impl AsRef<Path>) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    tracing::info!("Loading word list from {}", path.display());
    let file = File::open(path)?;
    let list: WordList = serde_json::from_reader(BufReader::new(file))?;
    Ok(normalize_words(list.words))
}

pub fn parse_word_list(json: &str) -> Result<Vec<Word>, WordListError> {
    let list: WordList = serde_json::from_str(json)?;
    Ok(normalize_words(list.words))
}

fn normalize_words(words: Vec<Word>) -> Vec<Word> {
    let total = words.len();
    let words: Vec<Word> = words
        .into_iter()
        .filter_map(|mut word| {
            let token = normalize_token(&word.token);
            if token.is_empty() {
                tracing::warn!("Dropping word with empty token: {:?}", word.token);
                return None;
            }
            word.token = token;
            Some(word)
        })
        .collect();

    tracing::debug!("Loaded {} of {} words", words.len(), total);
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("  friend\n"), "friend");
        // Fullwidth letters fold to ASCII under NFKC
        assert_eq!(normalize_token("ｈａｎｄ"), "hand");
        assert_eq!(normalize_token("   "), "");
    }

    #[test]
    fn test_parse_word_list_keeps_order_and_drops_blank_tokens() {
        let json = r#"{
            "words": [
                { "token": "shake", "sentences": [{ "text": "and shake his hand." }] },
                { "token": "  ", "sentences": [] },
                { "token": "friend" }
            ]
        }"#;
        let words = parse_word_list(json).unwrap();
        let tokens: Vec<_> = words.iter().map(|w| w.token.as_str()).collect();
        assert_eq!(tokens, ["shake", "friend"]);
        assert_eq!(words[0].sentences[0].text, "and shake his hand.");
        assert!(words[1].sentences.is_empty());
    }

    #[test]
    fn test_parse_word_list_rejects_bad_json() {
        assert!(matches!(
            parse_word_list("{ \"words\": 3 }"),
            Err(WordListError::Parse(_))
        ));
    }
}
