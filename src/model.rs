use serde::Deserialize;

use crate::error::{EngineError, InferenceError};
use crate::tokenizer::PAD_INDEX;

/// A `[rows, width]` batch of token ids, stored row-major as `f32`.
#[derive(Debug, Clone, PartialEq)]
pub struct InputBatch {
    data: Vec<f32>,
    rows: usize,
    width: usize,
}

impl InputBatch {
    pub fn single_row(row: &[u32]) -> Self {
        Self {
            data: row.iter().map(|&v| v as f32).collect(),
            rows: 1,
            width: row.len(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn row(&self, idx: usize) -> &[f32] {
        &self.data[idx * self.width..(idx + 1) * self.width]
    }
}

/// Output values of a forward pass. Dropped as soon as the scalar is read.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputTensor {
    data: Vec<f32>,
}

impl OutputTensor {
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    pub fn first(&self) -> Option<f32> {
        self.data.first().copied()
    }
}

pub trait SentimentModel: Send + Sync {
    /// Expected batch width, when the model fixes one.
    fn input_width(&self) -> Option<usize> {
        None
    }

    fn forward(&self, input: &InputBatch) -> Result<OutputTensor, InferenceError>;
}

/// Decodes fetched model bytes into a runnable model.
pub trait ModelFormat: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<Box<dyn SentimentModel>, EngineError>;
}

/// Mean of per-token weights plus a bias, squashed through a logistic.
/// Padding tokens are ignored; ids past the weight table contribute zero.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinearScorer {
    pub bias: f32,
    pub weights: Vec<f32>,
}

impl SentimentModel for LinearScorer {
    fn forward(&self, input: &InputBatch) -> Result<OutputTensor, InferenceError> {
        if input.rows() == 0 {
            return Err(InferenceError::EmptyOutput);
        }

        let scores = (0..input.rows())
            .map(|r| {
                let (sum, count) = input
                    .row(r)
                    .iter()
                    .map(|&v| v as usize)
                    .filter(|&id| id != PAD_INDEX as usize)
                    .fold((0.0_f32, 0_usize), |(sum, count), id| {
                        (sum + self.weights.get(id).copied().unwrap_or(0.0), count + 1)
                    });
                let mean = if count == 0 { 0.0 } else { sum / count as f32 };
                sigmoid(mean + self.bias)
            })
            .collect();

        Ok(OutputTensor::new(scores))
    }
}

/// JSON encoding of [`LinearScorer`]: `{"bias": f32, "weights": [f32, ...]}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearJsonFormat;

impl ModelFormat for LinearJsonFormat {
    fn decode(&self, bytes: &[u8]) -> Result<Box<dyn SentimentModel>, EngineError> {
        let scorer: LinearScorer =
            serde_json::from_slice(bytes).map_err(|e| EngineError::ModelDecode(e.to_string()))?;
        if !scorer.bias.is_finite() || scorer.weights.iter().any(|w| !w.is_finite()) {
            return Err(EngineError::ModelDecode(
                "non-finite parameter".to_string(),
            ));
        }
        Ok(Box::new(scorer))
    }
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}
