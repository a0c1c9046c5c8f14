use catchat_core::error::CorpusError;
use catchat_core::message::{Message, Sender};
use catchat_core::mood;
use catchat_core::responder::{self, GlyphAlphabet, ReplyCorpus};

fn corpus() -> ReplyCorpus {
    ReplyCorpus::new((0..6).map(|i| format!("line {}", i)).collect()).unwrap()
}

#[test]
fn reply_line_is_indexed_by_mood_bucket() {
    let corpus = corpus();
    let glyphs = GlyphAlphabet::default();
    for score in [0.0_f32, 0.1, 0.35, 0.5, 0.77, 0.9, 1.0] {
        let human = Message::human("whatever", Some(score));
        let reply = responder::synthesize_reply(&human, &corpus, &glyphs);
        let bucket = mood::mood_bucket(Some(score), 6);
        assert_eq!(reply.message.content, format!("line {}", bucket));
    }
}

#[test]
fn reply_is_deterministic() {
    let corpus = ReplyCorpus::default();
    let glyphs = GlyphAlphabet::default();
    let human = Message::human("hello", Some(0.8));
    let a = responder::synthesize_reply(&human, &corpus, &glyphs);
    let b = responder::synthesize_reply(&human.clone(), &corpus, &glyphs);
    assert_eq!(a, b);
}

#[test]
fn glyph_golden_values() {
    let glyphs = GlyphAlphabet::default();
    assert_eq!(responder::glyph_for(&Message::human("hello", Some(0.8)), &glyphs), "🐾");
    assert_eq!(responder::glyph_for(&Message::human("hello", None), &glyphs), "🌙");
    assert_eq!(responder::glyph_for(&Message::human("I love cats", Some(0.9)), &glyphs), "🥛");
    assert_eq!(responder::glyph_for(&Message::human("meow", Some(0.5)), &glyphs), "🥛");
}

#[test]
fn glyph_seed_adds_sentiment_millionths() {
    let base = responder::glyph_seed("hello", None);
    assert_eq!(base, 0xa430_d846_80aa_bd0b);
    assert_eq!(responder::glyph_seed("hello", Some(0.0)), base);
    assert_eq!(responder::glyph_seed("hello", Some(0.8)), base.wrapping_add(800_000));
}

#[test]
fn agent_message_carries_human_sentiment_or_one() {
    let corpus = ReplyCorpus::default();
    let glyphs = GlyphAlphabet::default();

    let scored = responder::synthesize_reply(&Message::human("hi", Some(0.25)), &corpus, &glyphs);
    assert_eq!(scored.message.from, Sender::Agent);
    assert_eq!(scored.message.sentiment, Some(0.25));

    let unscored = responder::synthesize_reply(&Message::human("hi", None), &corpus, &glyphs);
    assert_eq!(unscored.message.sentiment, Some(1.0));
    assert_eq!(unscored.message.content, corpus.line(0));
}

#[test]
fn glyph_is_not_part_of_content() {
    let corpus = ReplyCorpus::default();
    let glyphs = GlyphAlphabet::default();
    let reply = responder::synthesize_reply(&Message::human("hello", Some(0.8)), &corpus, &glyphs);
    assert!(corpus.lines().contains(&reply.message.content));
    assert!(!reply.message.content.contains(&reply.glyph));
}

#[test]
fn shorter_corpus_changes_bucket_count() {
    let corpus = ReplyCorpus::new(vec!["up".to_string(), "down".to_string()]).unwrap();
    let glyphs = GlyphAlphabet::new(vec!["*".to_string()]).unwrap();
    let reply = responder::synthesize_reply(&Message::human("x", Some(0.1)), &corpus, &glyphs);
    assert_eq!(reply.message.content, "down");
    assert_eq!(reply.glyph, "*");
}

#[test]
fn empty_inputs_are_rejected() {
    assert_eq!(ReplyCorpus::new(Vec::new()), Err(CorpusError::EmptyCorpus));
    assert_eq!(GlyphAlphabet::new(Vec::new()), Err(CorpusError::EmptyAlphabet));
}
