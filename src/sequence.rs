use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which end of a sequence padding or truncation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Pre,
    Post,
}

impl FromStr for Side {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pre" => Ok(Side::Pre),
            "post" => Ok(Side::Post),
            _ => Err(format!("expected 'pre' or 'post', got '{}'", value)),
        }
    }
}

/// Pad or truncate `seq` to exactly `max_len` elements.
///
/// Truncating `Pre` keeps the tail, `Post` keeps the head. Padding `Pre`
/// prepends `value`, `Post` appends it.
pub fn pad_sequence(seq: &[u32], max_len: usize, padding: Side, truncating: Side, value: u32) -> Vec<u32> {
    let kept = if seq.len() > max_len {
        match truncating {
            Side::Pre => &seq[seq.len() - max_len..],
            Side::Post => &seq[..max_len],
        }
    } else {
        seq
    };

    let missing = max_len - kept.len();
    let mut out = Vec::with_capacity(max_len);
    match padding {
        Side::Pre => {
            out.extend(std::iter::repeat_n(value, missing));
            out.extend_from_slice(kept);
        }
        Side::Post => {
            out.extend_from_slice(kept);
            out.extend(std::iter::repeat_n(value, missing));
        }
    }
    out
}

pub fn pad_sequences(
    sequences: &[Vec<u32>],
    max_len: usize,
    padding: Side,
    truncating: Side,
    value: u32,
) -> Vec<Vec<u32>> {
    sequences
        .iter()
        .map(|seq| pad_sequence(seq, max_len, padding, truncating, value))
        .collect()
}
