use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Human,
    Agent,
}

/// One line of the conversation. Never edited after it is appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub from: Sender,
    pub sentiment: Option<f32>,
    pub content: String,
}

impl Message {
    pub fn human(content: impl Into<String>, sentiment: Option<f32>) -> Self {
        Self {
            from: Sender::Human,
            sentiment,
            content: content.into(),
        }
    }

    pub fn agent(content: impl Into<String>, sentiment: f32) -> Self {
        Self {
            from: Sender::Agent,
            sentiment: Some(sentiment),
            content: content.into(),
        }
    }
}
