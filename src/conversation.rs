use tracing::info;

use crate::inference::{InferenceEngine, PredictionResult};
use crate::message::Message;
use crate::metrics::LatencyStats;
use crate::responder::{self, GlyphAlphabet, ReplyCorpus};

/// Result of one submission. `seq` numbers exchanges in submission order so
/// a reply can always be matched to the message that caused it.
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    pub seq: u64,
    pub human: Message,
    pub agent: Message,
    pub glyph: String,
    pub prediction: PredictionResult,
}

/// Append-only conversation driven from a single thread.
pub struct Conversation {
    engine: InferenceEngine,
    corpus: ReplyCorpus,
    glyphs: GlyphAlphabet,
    messages: Vec<Message>,
    next_seq: u64,
    latency: LatencyStats,
}

impl Conversation {
    pub fn new(engine: InferenceEngine) -> Self {
        Self::with_corpus(engine, ReplyCorpus::default(), GlyphAlphabet::default())
    }

    pub fn with_corpus(engine: InferenceEngine, corpus: ReplyCorpus, glyphs: GlyphAlphabet) -> Self {
        Self {
            engine,
            corpus,
            glyphs,
            messages: Vec::new(),
            next_seq: 0,
            latency: LatencyStats::default(),
        }
    }

    pub fn submit_human(&mut self, text: &str) -> Exchange {
        let prediction = self.engine.predict(text);
        self.latency.record(&prediction);

        let human = Message::human(text, prediction.score);
        self.messages.push(human.clone());

        let reply = responder::synthesize_reply(&human, &self.corpus, &self.glyphs);
        self.messages.push(reply.message.clone());

        let seq = self.next_seq;
        self.next_seq += 1;
        info!(
            seq,
            score = ?prediction.score,
            elapsed_ms = prediction.elapsed_ms,
            "exchange appended"
        );

        Exchange {
            seq,
            human,
            agent: reply.message,
            glyph: reply.glyph,
            prediction,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Mirrors the engine's `Loading` state so callers can gate input.
    pub fn is_loading(&self) -> bool {
        self.engine.is_loading()
    }

    pub fn latency(&self) -> &LatencyStats {
        &self.latency
    }

    pub fn glyphs(&self) -> &GlyphAlphabet {
        &self.glyphs
    }
}
