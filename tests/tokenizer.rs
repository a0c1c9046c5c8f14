use std::collections::HashMap;

use catchat_core::error::TokenizeError;
use catchat_core::tokenizer::{self, OOV_INDEX, VocabularyMetadata};

fn vocab() -> VocabularyMetadata {
    let mut word_index = HashMap::new();
    word_index.insert("i".to_string(), 10);
    word_index.insert("love".to_string(), 1);
    word_index.insert("cats".to_string(), 3);
    word_index.insert("obscure".to_string(), 45);
    VocabularyMetadata {
        index_from: 3,
        max_len: 8,
        word_index,
        vocabulary_size: 40,
    }
}

#[test]
fn known_words_are_offset_by_index_from() {
    assert_eq!(tokenizer::tokenize("I love cats", &vocab()), vec![13, 4, 6]);
}

#[test]
fn punctuation_and_case_are_normalized() {
    assert_eq!(tokenizer::tokenize("  I, LOVE... cats!  ", &vocab()), vec![13, 4, 6]);
}

#[test]
fn index_past_vocabulary_becomes_oov() {
    assert_eq!(tokenizer::tokenize("obscure", &vocab()), vec![OOV_INDEX]);
}

#[test]
fn index_equal_to_vocabulary_size_is_kept() {
    let mut v = vocab();
    v.word_index.insert("edge".to_string(), 37);
    assert_eq!(tokenizer::tokenize("edge", &v), vec![40]);
}

#[test]
fn unknown_words_map_to_oov() {
    assert_eq!(
        tokenizer::tokenize("i love dogs", &vocab()),
        vec![13, 4, OOV_INDEX]
    );
}

#[test]
fn strict_tokenize_reports_unknown_word() {
    let err = tokenizer::tokenize_strict("i love dogs", &vocab()).unwrap_err();
    assert_eq!(err, TokenizeError::UnknownToken("dogs".to_string()));
    assert_eq!(tokenizer::tokenize_strict("love cats", &vocab()).unwrap(), vec![4, 6]);
}

#[test]
fn empty_text_yields_no_tokens() {
    assert!(tokenizer::tokenize("   ", &vocab()).is_empty());
    assert!(tokenizer::tokenize("", &vocab()).is_empty());
}

#[test]
fn metadata_parses_from_json() {
    let json = br#"{"index_from": 3, "max_len": 5, "word_index": {"cat": 1}, "vocabulary_size": 10}"#;
    let meta = VocabularyMetadata::from_json_slice(json).expect("valid metadata");
    assert_eq!(meta.index_from, 3);
    assert_eq!(meta.max_len, 5);
    assert_eq!(meta.lookup("cat"), Some(4));
    assert_eq!(meta.lookup("dog"), None);
}

#[test]
fn metadata_rejects_zero_max_len_and_bad_shape() {
    let zero = br#"{"index_from": 3, "max_len": 0, "word_index": {}, "vocabulary_size": 10}"#;
    assert!(VocabularyMetadata::from_json_slice(zero).is_err());
    assert!(VocabularyMetadata::from_json_slice(b"{\"max_len\": 4}").is_err());
}

#[test]
fn bundled_metadata_is_valid() {
    let meta = VocabularyMetadata::from_json_slice(include_bytes!("../assets/metadata.json"))
        .expect("bundled metadata");
    assert_eq!(meta.max_len, 12);
    assert_eq!(tokenizer::tokenize("rare", &meta), vec![OOV_INDEX]);
}
