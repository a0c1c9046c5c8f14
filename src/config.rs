use std::path::PathBuf;

use clap::Parser;

use crate::inference::EngineOptions;
use crate::sequence::Side;
use crate::tokenizer::PAD_INDEX;

/// Settings for the `catchat` demo. Every flag can also come from a
/// `CATCHAT_*` environment variable.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "catchat", about = "Chat with a cat whose mood follows your sentiment")]
pub struct Config {
    /// Model artifact (linear scorer JSON).
    #[arg(long, env = "CATCHAT_MODEL", default_value = "assets/model.json")]
    pub model: PathBuf,

    /// Vocabulary metadata JSON.
    #[arg(long, env = "CATCHAT_METADATA", default_value = "assets/metadata.json")]
    pub metadata: PathBuf,

    /// Side to pad short sequences on (pre|post).
    #[arg(long, env = "CATCHAT_PADDING", default_value = "pre", value_parser = parse_side)]
    pub padding: Side,

    /// Side to cut long sequences from (pre|post).
    #[arg(long, env = "CATCHAT_TRUNCATING", default_value = "pre", value_parser = parse_side)]
    pub truncating: Side,

    /// File with one message per line.
    #[arg(long, env = "CATCHAT_INPUTS")]
    pub inputs: Option<PathBuf>,

    /// Messages separated by `;`.
    #[arg(long, env = "CATCHAT_SCRIPT")]
    pub script: Option<String>,

    /// Tracing filter used when RUST_LOG is unset.
    #[arg(long, env = "CATCHAT_LOG", default_value = "info,catchat_core=debug")]
    pub log: String,

    /// Start answering before the model finishes loading.
    #[arg(long, env = "CATCHAT_NO_WAIT", default_value_t = false)]
    pub no_wait: bool,
}

impl Config {
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            padding: self.padding,
            truncating: self.truncating,
            pad_value: PAD_INDEX,
        }
    }
}

fn parse_side(value: &str) -> Result<Side, String> {
    value.parse()
}

pub fn from_env_or_args() -> Config {
    Config::parse()
}
