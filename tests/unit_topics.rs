// Unit tests for corpus-level language analysis.
//
// Tests the vocabulary summary (tokenization, ordering, the take-then-filter
// length rule) and future topic extraction (sentence split, cue matching,
// first-N ordering).

use commentlens::comments::Comment;
use commentlens::topics::future::{FutureTopicExtractor, PLACEHOLDER_ENGAGEMENT};
use commentlens::topics::vocabulary::{words, VocabularySummarizer};

fn batch(texts: &[&str]) -> Vec<Comment> {
    texts.iter().map(|t| Comment::new(*t, 0)).collect()
}

// ============================================================
// Vocabulary: tokenization
// ============================================================

#[test]
fn words_keep_unicode_letters() {
    let tokens: Vec<&str> = words("café déjà-vu naïve").collect();
    assert_eq!(tokens, vec!["café", "déjà", "vu", "naïve"]);
}

#[test]
fn words_drop_emoji_and_punctuation() {
    let tokens: Vec<&str> = words("wow!!! 🔥🔥 so good...").collect();
    assert_eq!(tokens, vec!["wow", "so", "good"]);
}

// ============================================================
// Vocabulary: summary
// ============================================================

#[test]
fn unicode_word_length_counts_characters() {
    // "café" is 4 characters (5 bytes) and passes the > 3 filter
    let summary = VocabularySummarizer::default().summarize(&batch(&["café café"]));
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].word, "café");
    assert_eq!(summary[0].count, 2);
}

#[test]
fn summary_counts_across_comments_case_folded() {
    let summary =
        VocabularySummarizer::default().summarize(&batch(&["Rust is Fast", "RUST rocks"]));
    assert_eq!(summary[0].word, "rust");
    assert_eq!(summary[0].count, 2);
}

#[test]
fn summary_ties_keep_first_seen_order() {
    let summary =
        VocabularySummarizer::default().summarize(&batch(&["zebra apple mango", "mango zebra"]));
    let words: Vec<&str> = summary.iter().map(|e| e.word.as_str()).collect();
    assert_eq!(words, vec!["zebra", "mango", "apple"]);
}

#[test]
fn summary_can_be_shorter_than_top_n() {
    let summarizer = VocabularySummarizer {
        top_n: 3,
        min_word_chars: 3,
    };
    // top 3 by count: "it" (3), "is" (2), "great" (2); two are too short
    let summary = summarizer.summarize(&batch(&["it is great", "it is great", "it works"]));
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].word, "great");
}

#[test]
fn summary_never_exceeds_top_n() {
    let text = "alpha bravo charlie delta echoes foxtrot golfer hotel india juliet kilos limas";
    let summary = VocabularySummarizer::default().summarize(&batch(&[text]));
    assert_eq!(summary.len(), 10);
    assert_eq!(summary[9].word, "juliet");
}

// ============================================================
// Future topics
// ============================================================

#[test]
fn future_topics_in_document_order() {
    let comments = batch(&[
        "I hope they add dark mode. Looks good",
        "Next time cover async",
        "Would love a part two",
    ]);
    let topics = FutureTopicExtractor::default().extract(&comments);
    let texts: Vec<&str> = topics.iter().map(|t| t.topic.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "I hope they add dark mode",
            "Next time cover async",
            "Would love a part two",
        ]
    );
}

#[test]
fn future_topics_first_n_only() {
    let comments = batch(&["want one. want two. want three", "want four. want five. want six"]);
    let topics = FutureTopicExtractor::default().extract(&comments);
    assert_eq!(topics.len(), 5);
    assert_eq!(topics[4].topic, "want five");
}

#[test]
fn future_topics_carry_placeholder_engagement() {
    let comments = vec![Comment::new("We need a sequel", 500).with_replies(20)];
    let topics = FutureTopicExtractor::default().extract(&comments);
    assert_eq!(topics.len(), 1);
    assert_eq!(topics[0].engagement, PLACEHOLDER_ENGAGEMENT);
}

#[test]
fn future_topic_cue_ignores_case() {
    let topics = FutureTopicExtractor::default().extract(&batch(&["UPCOMING release looks wild"]));
    assert_eq!(topics.len(), 1);
}

#[test]
fn future_topics_custom_cap() {
    let extractor = FutureTopicExtractor { max_topics: 1 };
    let topics = extractor.extract(&batch(&["need a. need b"]));
    assert_eq!(topics.len(), 1);
    assert_eq!(topics[0].topic, "need a");
}
