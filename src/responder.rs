use crate::error::CorpusError;
use crate::message::Message;
use crate::metrics;
use crate::mood;
use crate::rng::{self, SplitMix64};

const DEFAULT_REPLIES: [&str; mood::DEFAULT_BUCKETS] = [
    "Purrrfect! You've made my whiskers tingle.",
    "Mrrrow, that sounds lovely.",
    "Meow. Tell me more.",
    "Hmph. I've heard better.",
    "Mew... that makes me sad.",
    "HISSSS! Keep that away from me!",
];

const DEFAULT_GLYPHS: [&str; 6] = ["🐾", "🐟", "🧶", "🐭", "🥛", "🌙"];

/// Reply lines ordered from most positive to most negative. The number of
/// lines sets the number of mood buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyCorpus {
    lines: Vec<String>,
}

impl ReplyCorpus {
    pub fn new(lines: Vec<String>) -> Result<Self, CorpusError> {
        if lines.is_empty() {
            return Err(CorpusError::EmptyCorpus);
        }
        Ok(Self { lines })
    }

    pub fn num_buckets(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, bucket: usize) -> &str {
        &self.lines[bucket.min(self.lines.len() - 1)]
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Default for ReplyCorpus {
    fn default() -> Self {
        Self {
            lines: DEFAULT_REPLIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphAlphabet {
    glyphs: Vec<String>,
}

impl GlyphAlphabet {
    pub fn new(glyphs: Vec<String>) -> Result<Self, CorpusError> {
        if glyphs.is_empty() {
            return Err(CorpusError::EmptyAlphabet);
        }
        Ok(Self { glyphs })
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn get(&self, idx: usize) -> &str {
        &self.glyphs[idx]
    }
}

impl Default for GlyphAlphabet {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_GLYPHS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Agent reply and the glyph shown after it. The glyph is kept apart from
/// the message text.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub message: Message,
    pub glyph: String,
}

/// `fnv1a64(content)` plus the sentiment in millionths (missing counts as 0).
pub fn glyph_seed(content: &str, sentiment: Option<f32>) -> u64 {
    let sentiment = sentiment.filter(|s| s.is_finite()).map(metrics::clamp01).unwrap_or(0.0);
    let micros = (sentiment as f64 * 1_000_000.0).round() as u64;
    rng::fnv1a64(content).wrapping_add(micros)
}

pub fn glyph_for<'a>(human: &Message, glyphs: &'a GlyphAlphabet) -> &'a str {
    let mut rng = SplitMix64::new(glyph_seed(&human.content, human.sentiment));
    glyphs.get(rng.uniform_index(glyphs.len()))
}

pub fn synthesize_reply(human: &Message, corpus: &ReplyCorpus, glyphs: &GlyphAlphabet) -> Reply {
    let bucket = mood::mood_bucket(human.sentiment, corpus.num_buckets());
    let message = Message::agent(corpus.line(bucket), human.sentiment.unwrap_or(1.0));
    Reply {
        message,
        glyph: glyph_for(human, glyphs).to_string(),
    }
}
