use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{EngineError, TokenizeError};
use crate::utils;

/// Index of the padding token.
pub const PAD_INDEX: u32 = 0;
/// Index substituted for words the model cannot represent.
pub const OOV_INDEX: u32 = 2;

/// Vocabulary metadata published next to the model artifact.
///
/// Mirrors the JSON document `{"index_from", "max_len", "word_index",
/// "vocabulary_size"}`. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VocabularyMetadata {
    pub index_from: u32,
    pub max_len: usize,
    pub word_index: HashMap<String, u32>,
    pub vocabulary_size: u32,
}

impl VocabularyMetadata {
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, EngineError> {
        let meta: VocabularyMetadata = serde_json::from_slice(bytes)?;
        meta.validate()?;
        Ok(meta)
    }

    fn validate(&self) -> Result<(), EngineError> {
        if self.max_len == 0 {
            return Err(EngineError::InvalidMetadata(
                "max_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Final index for a known word, or `None` when the word is absent.
    pub fn lookup(&self, word: &str) -> Option<u32> {
        let base = *self.word_index.get(word)?;
        let index = base.saturating_add(self.index_from);
        if index > self.vocabulary_size {
            Some(OOV_INDEX)
        } else {
            Some(index)
        }
    }
}

/// Tokenize `text`, mapping unknown words to [`OOV_INDEX`].
pub fn tokenize(text: &str, vocab: &VocabularyMetadata) -> Vec<u32> {
    utils::words(text)
        .iter()
        .map(|word| vocab.lookup(word).unwrap_or(OOV_INDEX))
        .collect()
}

/// Tokenize `text`, failing on the first word missing from the vocabulary.
pub fn tokenize_strict(text: &str, vocab: &VocabularyMetadata) -> Result<Vec<u32>, TokenizeError> {
    utils::words(text)
        .into_iter()
        .map(|word| match vocab.lookup(&word) {
            Some(index) => Ok(index),
            None => Err(TokenizeError::UnknownToken(word)),
        })
        .collect()
}
