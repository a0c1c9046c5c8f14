use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;
use serde::Serialize;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::error::EngineError;
use crate::metrics;
use crate::model::{InputBatch, ModelFormat, SentimentModel};
use crate::sequence::{self, Side};
use crate::source::ArtifactSource;
use crate::tokenizer::{self, PAD_INDEX, VocabularyMetadata};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EngineStatus {
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub score: Option<f32>,
    pub elapsed_ms: f64,
}

impl PredictionResult {
    pub fn unavailable() -> Self {
        Self {
            score: None,
            elapsed_ms: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    pub padding: Side,
    pub truncating: Side,
    pub pad_value: u32,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            padding: Side::Pre,
            truncating: Side::Pre,
            pad_value: PAD_INDEX,
        }
    }
}

/// Model and metadata artifacts plus the format used to decode the model.
#[derive(Clone)]
pub struct EngineSources {
    pub model: Arc<dyn ArtifactSource>,
    pub format: Arc<dyn ModelFormat>,
    pub metadata: Arc<dyn ArtifactSource>,
}

struct Loaded {
    model: Box<dyn SentimentModel>,
    vocab: VocabularyMetadata,
}

impl Loaded {
    fn new(model: Box<dyn SentimentModel>, vocab: VocabularyMetadata) -> Result<Self, EngineError> {
        if let Some(width) = model.input_width() {
            if width != vocab.max_len {
                return Err(EngineError::InvalidMetadata(format!(
                    "model width {} != max_len {}",
                    width, vocab.max_len
                )));
            }
        }
        Ok(Self { model, vocab })
    }
}

enum EngineState {
    Loading,
    Ready(Loaded),
    Failed(String),
}

impl EngineState {
    fn status(&self) -> EngineStatus {
        match self {
            EngineState::Loading => EngineStatus::Loading,
            EngineState::Ready(_) => EngineStatus::Ready,
            EngineState::Failed(_) => EngineStatus::Failed,
        }
    }
}

#[derive(Clone)]
pub struct InferenceEngine {
    state: Arc<RwLock<EngineState>>,
    options: EngineOptions,
}

impl Default for InferenceEngine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

impl InferenceEngine {
    /// A fresh engine in `Loading`.
    pub fn new(options: EngineOptions) -> Self {
        Self {
            state: Arc::new(RwLock::new(EngineState::Loading)),
            options,
        }
    }

    /// An engine that is `Ready` from the start with an already decoded model.
    pub fn ready(
        model: Box<dyn SentimentModel>,
        vocab: VocabularyMetadata,
        options: EngineOptions,
    ) -> Result<Self, EngineError> {
        let loaded = Loaded::new(model, vocab)?;
        Ok(Self {
            state: Arc::new(RwLock::new(EngineState::Ready(loaded))),
            options,
        })
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    pub fn status(&self) -> EngineStatus {
        self.state.read().status()
    }

    pub fn is_loading(&self) -> bool {
        self.status() == EngineStatus::Loading
    }

    /// Reason recorded when initialization failed.
    pub fn failure(&self) -> Option<String> {
        match &*self.state.read() {
            EngineState::Failed(reason) => Some(reason.clone()),
            _ => None,
        }
    }

    /// Fetch and decode both artifacts, then settle the engine state.
    ///
    /// Errors are logged and recorded, never returned. Only the first
    /// initialization of an engine has any effect.
    pub async fn init(&self, sources: &EngineSources) -> EngineStatus {
        if !self.is_loading() {
            warn!(status = ?self.status(), "engine already initialized, ignoring init");
            return self.status();
        }

        let outcome = load(sources).await;

        let mut state = self.state.write();
        if !matches!(*state, EngineState::Loading) {
            warn!(status = ?state.status(), "engine settled concurrently, dropping load result");
            return state.status();
        }
        *state = match outcome {
            Ok(loaded) => {
                info!(
                    max_len = loaded.vocab.max_len,
                    vocabulary_size = loaded.vocab.vocabulary_size,
                    "sentiment engine ready"
                );
                EngineState::Ready(loaded)
            }
            Err(err) => {
                error!(error = %err, "sentiment engine failed to load");
                EngineState::Failed(err.to_string())
            }
        };
        state.status()
    }

    /// Run [`init`](Self::init) on the current tokio runtime without waiting
    /// for it. Returns `None`, leaving the engine in `Loading`, when called
    /// outside a runtime.
    pub fn spawn_init(&self, sources: EngineSources) -> Option<JoinHandle<EngineStatus>> {
        let runtime = match Handle::try_current() {
            Ok(handle) => handle,
            Err(err) => {
                error!(error = %err, "no tokio runtime, engine stays loading");
                return None;
            }
        };
        let engine = self.clone();
        Some(runtime.spawn(async move { engine.init(&sources).await }))
    }

    /// Score `text`. Never blocks on loading and never fails.
    pub fn predict(&self, text: &str) -> PredictionResult {
        let state = self.state.read();
        let EngineState::Ready(loaded) = &*state else {
            debug!(status = ?state.status(), "prediction requested before engine ready");
            return PredictionResult::unavailable();
        };

        let max_len = loaded.vocab.max_len;
        let tokens = tokenizer::tokenize(text, &loaded.vocab);
        let padded = sequence::pad_sequence(
            &tokens,
            max_len,
            self.options.padding,
            self.options.truncating,
            self.options.pad_value,
        );

        // Batch and output buffers are dropped at the end of this scope.
        let (score, elapsed_ms) = {
            let input = InputBatch::single_row(&padded);
            let begin = Instant::now();
            let output = loaded.model.forward(&input);
            let elapsed_ms = begin.elapsed().as_secs_f64() * 1000.0;
            let score = match output {
                Ok(tensor) => tensor.first(),
                Err(err) => {
                    warn!(error = %err, "forward pass failed");
                    None
                }
            };
            (score, elapsed_ms)
        };

        let score = score.filter(|s| s.is_finite()).map(metrics::clamp01);
        debug!(tokens = tokens.len(), ?score, elapsed_ms, "prediction");
        PredictionResult { score, elapsed_ms }
    }
}

async fn load(sources: &EngineSources) -> Result<Loaded, EngineError> {
    debug!(model = %sources.model.describe(), metadata = %sources.metadata.describe(), "loading artifacts");
    let model_bytes = sources.model.fetch().await?;
    let model = sources.format.decode(&model_bytes)?;
    let metadata_bytes = sources.metadata.fetch().await?;
    let vocab = VocabularyMetadata::from_json_slice(&metadata_bytes)?;
    Loaded::new(model, vocab)
}
