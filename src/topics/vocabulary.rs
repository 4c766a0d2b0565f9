// Vocabulary summary: the most frequent words across a whole batch.
//
// The whole corpus is lower-cased and joined with spaces, split into runs of
// word characters, and counted. The top N words by count are taken first and
// only then filtered by length, so short filler words still occupy slots in
// the top N and the summary can come back shorter than N.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::comments::Comment;

/// One trending word and how often it appears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub word: String,
    pub count: u64,
}

pub struct VocabularySummarizer {
    /// How many of the most frequent words to consider
    pub top_n: usize,
    /// Words must be strictly longer than this (in characters) to be kept
    pub min_word_chars: usize,
}

impl Default for VocabularySummarizer {
    fn default() -> Self {
        Self {
            top_n: 10,
            min_word_chars: 3,
        }
    }
}

impl VocabularySummarizer {
    pub fn summarize(&self, comments: &[Comment]) -> Vec<VocabularyEntry> {
        let corpus = comments
            .iter()
            .map(|c| c.text.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");

        let counts = count_words(&corpus);
        debug!(distinct_words = counts.len(), "Counted corpus vocabulary");

        // Stable sort: equal counts keep first-seen order
        let mut ranked = counts;
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked
            .into_iter()
            .take(self.top_n)
            .filter(|(word, _)| word.chars().count() > self.min_word_chars)
            .map(|(word, count)| VocabularyEntry { word, count })
            .collect()
    }
}

/// Count word occurrences, preserving the order words were first seen.
fn count_words(text: &str) -> Vec<(String, u64)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, u64)> = Vec::new();

    for word in words(text) {
        match index.get(word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word, counts.len());
                counts.push((word.to_string(), 1));
            }
        }
    }

    counts
}

/// Maximal runs of word characters (letters, digits, underscore).
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
