pub mod config;
pub mod conversation;
pub mod dialog;
pub mod error;
pub mod inference;
pub mod message;
pub mod metrics;
pub mod model;
pub mod mood;
pub mod responder;
pub mod rng;
pub mod sequence;
pub mod source;
pub mod tokenizer;
pub mod utils;
