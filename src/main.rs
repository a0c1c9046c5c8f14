use std::io::{self, BufRead};
use std::sync::Arc;

use catchat_core::config;
use catchat_core::conversation::Conversation;
use catchat_core::dialog;
use catchat_core::inference::{EngineSources, InferenceEngine};
use catchat_core::model::LinearJsonFormat;
use catchat_core::mood;
use catchat_core::source::FileSource;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cfg = config::from_env_or_args();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| cfg.log.as_str().into()))
        .init();

    let engine = InferenceEngine::new(cfg.engine_options());
    let sources = EngineSources {
        model: Arc::new(FileSource::new(cfg.model.clone())),
        format: Arc::new(LinearJsonFormat),
        metadata: Arc::new(FileSource::new(cfg.metadata.clone())),
    };
    let init = engine.spawn_init(sources);

    if let Some(init) = init.filter(|_| !cfg.no_wait) {
        match init.await {
            Ok(status) => info!(?status, "engine settled"),
            Err(err) => error!(error = %err, "engine init task aborted"),
        }
    }

    let mut convo = Conversation::new(engine);
    if convo.is_loading() {
        println!("[cat] still waking up, replies stay sunny until then");
    }

    let scripted = dialog::load_inputs(&cfg);
    if scripted.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines().map_while(Result::ok) {
            let text = line.trim();
            if !text.is_empty() {
                respond(&mut convo, text);
            }
        }
    } else {
        for text in &scripted {
            respond(&mut convo, text);
        }
    }

    println!("{}", convo.latency().summary_line());
}

fn respond(convo: &mut Conversation, text: &str) {
    let exchange = convo.submit_human(text);
    let score = match exchange.human.sentiment {
        Some(s) => format!("{:.3}", s),
        None => "n/a".to_string(),
    };
    println!("[you] {} (sentiment={})", exchange.human.content, score);
    println!(
        "{} [cat] {} {}",
        mood::mood_face(exchange.agent.sentiment),
        exchange.agent.content,
        exchange.glyph
    );
}
