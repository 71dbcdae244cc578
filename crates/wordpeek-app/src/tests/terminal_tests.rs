use wordpeek_types::{PartOfSpeech, Word};

use crate::terminal::{Command, parse_command, resolve_word};

#[test]
fn test_parse_commands() {
    assert_eq!(parse_command("2"), Ok(Command::Select("2".to_string())));
    assert_eq!(
        parse_command("select hand"),
        Ok(Command::Select("hand".to_string()))
    );
    assert_eq!(
        parse_command("pos adj"),
        Ok(Command::Pos(PartOfSpeech::Adjective))
    );
    assert_eq!(parse_command("  BACK "), Ok(Command::Back));
    assert_eq!(parse_command("q"), Ok(Command::Quit));
}

#[test]
fn test_parse_rejects_garbage() {
    assert!(parse_command("pos pronoun").is_err());
    assert!(parse_command("select").is_err());
    assert!(parse_command("dance").is_err());
    assert!(parse_command("").is_err());
}

#[test]
fn test_resolve_word_by_position_and_token() {
    let words = vec![Word::new("hand", &[]), Word::new("see", &[])];

    assert_eq!(resolve_word(&words, "2").map(|w| w.token), Some("see".to_string()));
    assert_eq!(resolve_word(&words, "hand").map(|w| w.token), Some("hand".to_string()));
    assert!(resolve_word(&words, "0").is_none());
    assert!(resolve_word(&words, "3").is_none());
    assert!(resolve_word(&words, "friend").is_none());
}
