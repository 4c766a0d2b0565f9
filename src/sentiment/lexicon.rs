// Lexicon sentiment oracle: the default scorer.
//
// Zero API calls, runs locally. Each known sentiment word contributes one
// assessment (polarity, subjectivity). An intensifier just before a word
// scales it; a negator flips it and halves it. The text's score is the mean
// of its assessments. Text with no sentiment words scores (0.0, 0.0).

use std::collections::HashMap;
use std::sync::LazyLock;

use anyhow::Result;

use super::traits::{SentimentOracle, SentimentScore};

/// (word, polarity, subjectivity)
const LEXICON: &[(&str, f64, f64)] = &[
    // positive
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("brilliant", 0.9, 1.0),
    ("cool", 0.35, 0.65),
    ("easy", 0.43, 0.83),
    ("enjoy", 0.4, 0.5),
    ("enjoyed", 0.4, 0.5),
    ("excellent", 1.0, 1.0),
    ("excited", 0.375, 0.75),
    ("exciting", 0.3, 0.8),
    ("fantastic", 0.4, 0.9),
    ("favorite", 0.5, 1.0),
    ("fun", 0.3, 0.2),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("helpful", 0.4, 0.5),
    ("impressed", 1.0, 1.0),
    ("impressive", 1.0, 1.0),
    ("incredible", 0.9, 0.9),
    ("interesting", 0.5, 0.5),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("lovely", 0.5, 0.75),
    ("nice", 0.6, 1.0),
    ("perfect", 1.0, 1.0),
    ("pleased", 0.5, 1.0),
    ("super", 0.33, 0.67),
    ("useful", 0.3, 0.0),
    ("valuable", 0.5, 0.5),
    ("wonderful", 1.0, 1.0),
    ("worth", 0.3, 0.1),
    // negative
    ("angry", -0.5, 1.0),
    ("annoyed", -0.4, 0.5),
    ("annoying", -0.8, 0.9),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("boring", -1.0, 1.0),
    ("broken", -0.4, 0.4),
    ("buggy", -0.5, 0.6),
    ("confusing", -0.3, 0.7),
    ("difficult", -0.5, 1.0),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("expensive", -0.5, 0.7),
    ("frustrated", -0.7, 0.7),
    ("frustrating", -0.4, 0.4),
    ("hard", -0.29, 0.54),
    ("hate", -0.8, 0.9),
    ("hated", -0.9, 0.7),
    ("horrible", -1.0, 1.0),
    ("overpriced", -0.6, 0.7),
    ("poor", -0.4, 0.6),
    ("sad", -0.5, 1.0),
    ("slow", -0.3, 0.4),
    ("stupid", -0.8, 1.0),
    ("terrible", -1.0, 1.0),
    ("ugly", -0.7, 1.0),
    ("useless", -0.5, 0.0),
    ("waste", -0.5, 0.5),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.9),
];

/// Words that scale the next sentiment word.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.4),
    ("quite", 1.1),
    ("really", 1.3),
    ("slightly", 0.6),
    ("somewhat", 0.7),
    ("totally", 1.2),
    ("very", 1.3),
];

const NEGATORS: &[&str] = &[
    "no", "not", "never", "without", "hardly", "cant", "dont", "doesnt", "didnt", "isnt",
    "wasnt", "arent", "wont",
];

/// Multiplier applied to a negated word's polarity.
const NEGATION_FACTOR: f64 = -0.5;

/// How many unrelated tokens a pending modifier survives before it lapses.
const MODIFIER_REACH: usize = 2;

#[derive(Debug, Clone, Copy)]
struct Entry {
    polarity: f64,
    subjectivity: f64,
}

static ENTRIES: LazyLock<HashMap<&'static str, Entry>> = LazyLock::new(|| {
    LEXICON
        .iter()
        .map(|&(word, polarity, subjectivity)| {
            (
                word,
                Entry {
                    polarity,
                    subjectivity,
                },
            )
        })
        .collect()
});

static INTENSITY: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| INTENSIFIERS.iter().copied().collect());

/// Lexicon-based sentiment oracle.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconOracle;

impl LexiconOracle {
    pub fn new() -> Self {
        Self
    }

    /// Score text without the `Result` wrapper. Lexicon scoring cannot fail.
    pub fn score(&self, text: &str) -> SentimentScore {
        let lower = text.to_lowercase();

        let mut assessments: Vec<(f64, f64)> = Vec::new();
        let mut negated = false;
        let mut intensity: f64 = 1.0;
        let mut gap = 0usize;

        for token in tokenize(&lower) {
            if is_negator(token) {
                negated = true;
                gap = 0;
                continue;
            }
            if let Some(factor) = INTENSITY.get(token) {
                intensity *= *factor;
                gap = 0;
                continue;
            }
            if let Some(entry) = ENTRIES.get(token) {
                let mut polarity = entry.polarity * intensity;
                if negated {
                    polarity *= NEGATION_FACTOR;
                }
                let subjectivity = entry.subjectivity * intensity;
                assessments.push((polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0)));

                negated = false;
                intensity = 1.0;
                gap = 0;
                continue;
            }

            gap += 1;
            if gap > MODIFIER_REACH {
                negated = false;
                intensity = 1.0;
            }
        }

        if assessments.is_empty() {
            return SentimentScore::default();
        }

        let n = assessments.len() as f64;
        let polarity: f64 = assessments.iter().map(|(p, _)| p).sum::<f64>() / n;
        let subjectivity: f64 = assessments.iter().map(|(_, s)| s).sum::<f64>() / n;

        SentimentScore {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }
}

impl SentimentOracle for LexiconOracle {
    fn score_text(&self, text: &str) -> Result<SentimentScore> {
        Ok(self.score(text))
    }
}

/// Split on anything that isn't a letter, digit, or apostrophe.
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
}

fn is_negator(token: &str) -> bool {
    token.ends_with("n't") || NEGATORS.iter().any(|n| *n == token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_review() {
        let score = LexiconOracle::new().score(
            "I think this product is amazing and I love it so much, best purchase ever!",
        );
        // (0.6 + 0.5 + 1.0) / 3
        assert!((score.polarity - 0.7).abs() < 0.001, "got {}", score.polarity);
    }

    #[test]
    fn test_negative_review() {
        let score = LexiconOracle::new().score("This is terrible and the support was awful");
        assert!((score.polarity + 1.0).abs() < 0.001);
    }

    #[test]
    fn test_negation_flips_and_halves() {
        let score = LexiconOracle::new().score("this is not good");
        // 0.7 * -0.5
        assert!((score.polarity + 0.35).abs() < 0.001);
    }

    #[test]
    fn test_contraction_negates() {
        let score = LexiconOracle::new().score("it isn't bad at all");
        assert!(score.polarity > 0.0);
    }

    #[test]
    fn test_intensifier_scales() {
        let oracle = LexiconOracle::new();
        let plain = oracle.score("good").polarity;
        let boosted = oracle.score("very good").polarity;
        assert!(boosted > plain);
        assert!(boosted <= 1.0);
    }

    #[test]
    fn test_modifier_lapses_after_reach() {
        // "not" is too far from "good" to negate it
        let score = LexiconOracle::new().score("not that i mind since it is good");
        assert!(score.polarity > 0.0);
    }

    #[test]
    fn test_no_sentiment_words() {
        let score = LexiconOracle::new().score("the package arrived on tuesday");
        assert_eq!(score, SentimentScore::default());
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(LexiconOracle::new().score(""), SentimentScore::default());
    }
}
