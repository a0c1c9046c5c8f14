use crate::inference::PredictionResult;

/// Running latency figures for the predictions made in one session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LatencyStats {
    pub scored: usize,
    pub unscored: usize,
    pub total_ms: f64,
    pub max_ms: f64,
}

impl LatencyStats {
    pub fn record(&mut self, result: &PredictionResult) {
        if result.score.is_none() {
            self.unscored += 1;
            return;
        }
        self.scored += 1;
        self.total_ms += result.elapsed_ms;
        if result.elapsed_ms > self.max_ms {
            self.max_ms = result.elapsed_ms;
        }
    }

    pub fn mean_ms(&self) -> f64 {
        if self.scored == 0 {
            0.0
        } else {
            self.total_ms / self.scored as f64
        }
    }

    pub fn summary_line(&self) -> String {
        format!(
            "[metrics] scored={} unscored={} mean={:.3}ms max={:.3}ms",
            self.scored,
            self.unscored,
            self.mean_ms(),
            self.max_ms
        )
    }
}

pub fn clamp01(v: f32) -> f32 {
    if v < 0.0 {
        0.0
    } else if v > 1.0 {
        1.0
    } else {
        v
    }
}
