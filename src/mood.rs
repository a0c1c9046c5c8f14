use crate::metrics;

/// Number of mood buckets used by the default corpus.
pub const DEFAULT_BUCKETS: usize = 6;

/// Avatar faces per bucket, most positive first.
pub static MOOD_FACES: &[&str] = &["😻", "😽", "😺", "😾", "😿", "🙀"];

/// Map a sentiment score to a bucket index, 0 being the most positive.
///
/// A missing or non-finite score counts as `1.0`. Scores are clamped to
/// `[0, 1]` and halves round away from zero, so `0.5` over six buckets
/// lands in bucket 3.
pub fn mood_bucket(score: Option<f32>, num_buckets: usize) -> usize {
    if num_buckets <= 1 {
        return 0;
    }
    let score = score.filter(|s| s.is_finite()).map(metrics::clamp01).unwrap_or(1.0);
    let max_index = (num_buckets - 1) as f64;
    let idx = ((1.0 - score as f64) * max_index).round() as usize;
    idx.min(num_buckets - 1)
}

pub fn mood_face(score: Option<f32>) -> &'static str {
    MOOD_FACES[mood_bucket(score, MOOD_FACES.len())]
}
