use thiserror::Error;

/// Failures while bringing the inference engine up. None of these reach
/// `predict` callers; the engine logs them and parks in `Failed`.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to fetch {source_name}: {reason}")]
    Fetch { source_name: String, reason: String },

    #[error("metadata parse error: {0}")]
    Metadata(#[from] serde_json::Error),

    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),

    #[error("model decode error: {0}")]
    ModelDecode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    #[error("unknown token: {0:?}")]
    UnknownToken(String),
}

/// Raised by a model runtime during a forward pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    #[error("model produced no output")]
    EmptyOutput,

    #[error("runtime error: {0}")]
    Runtime(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorpusError {
    #[error("reply corpus must contain at least one line")]
    EmptyCorpus,

    #[error("glyph alphabet must contain at least one glyph")]
    EmptyAlphabet,
}
