// Insight aggregator: runs the whole analysis over one comment batch.
//
// Stages, in order:
// 1. Vocabulary summary over the full corpus
// 2. Per-comment pass: category, pain point, sentiment (length-gated)
// 3. Future topics over the full corpus
// 4. Rank and truncate every bucket
//
// Failures are all-or-nothing. `try_analyze` reports what went wrong;
// `analyze` discards any partial work and hands back the empty result.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, error, info};

use super::error::AnalysisError;
use super::result::{AnalysisResult, Insight, RankedComment};
use crate::classify::{self, Category};
use crate::comments::Comment;
use crate::scoring::engagement::{engagement, rank_by_engagement};
use crate::scoring::ranking::top_k_by;
use crate::sentiment::traits::{SentimentOracle, Tone};
use crate::topics::future::FutureTopicExtractor;
use crate::topics::vocabulary::VocabularySummarizer;

/// Thresholds and bucket caps.
///
/// Every gate is exclusive: a comment needs strictly more than
/// `min_text_chars` characters and strictly more than
/// `min_category_engagement` engagement to pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerSettings {
    /// Comments at or below this many characters skip per-comment analysis (default 30)
    pub min_text_chars: usize,
    /// Categorized comments need more engagement than this to be kept (default 2)
    pub min_category_engagement: u64,
    /// Polarity must exceed this (or fall below its negative) to count (default 0.3)
    pub polarity_threshold: f64,
    /// Think/Feel/Act bucket size (default 4)
    pub category_cap: usize,
    /// Pain point bucket size (default 5)
    pub pain_point_cap: usize,
    /// Size of each sentiment list (default 3)
    pub sentiment_cap: usize,
    /// Vocabulary words considered (default 10)
    pub vocabulary_size: usize,
    /// Vocabulary words must be longer than this (default 3)
    pub min_word_chars: usize,
    /// Future topics returned (default 5)
    pub future_topic_cap: usize,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            min_text_chars: 30,
            min_category_engagement: 2,
            polarity_threshold: 0.3,
            category_cap: 4,
            pain_point_cap: 5,
            sentiment_cap: 3,
            vocabulary_size: 10,
            min_word_chars: 3,
            future_topic_cap: 5,
        }
    }
}

/// Orchestrates the classifier, the sentiment oracle, and the corpus
/// summaries over a batch. Holds no per-call state, so one aggregator can
/// serve any number of analyses, including concurrent ones.
#[derive(Clone)]
pub struct InsightAggregator {
    oracle: Arc<dyn SentimentOracle>,
    settings: AnalyzerSettings,
}

impl InsightAggregator {
    pub fn new(oracle: Arc<dyn SentimentOracle>) -> Self {
        Self {
            oracle,
            settings: AnalyzerSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: AnalyzerSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &AnalyzerSettings {
        &self.settings
    }

    /// Analyze a batch. Never fails: any error yields the empty result.
    pub fn analyze(&self, comments: &[Comment]) -> AnalysisResult {
        self.try_analyze(comments).unwrap_or_else(fail_closed)
    }

    /// Analyze unvalidated JSON records. A record that isn't a valid
    /// comment fails the whole batch, just like an oracle error.
    pub fn analyze_records(&self, records: &[serde_json::Value]) -> AnalysisResult {
        parse_records(records)
            .and_then(|comments| self.try_analyze(&comments))
            .unwrap_or_else(fail_closed)
    }

    /// Analyze a batch, reporting the first error instead of hiding it.
    pub fn try_analyze(&self, comments: &[Comment]) -> Result<AnalysisResult, AnalysisError> {
        info!(comments = comments.len(), "Starting comment analysis");

        if let Some(top) = rank_by_engagement(comments).first() {
            debug!(
                top_engagement = engagement(top),
                author = top.author_or_anonymous(),
                "Most engaged comment in batch"
            );
        }

        let settings = &self.settings;
        let mut result = AnalysisResult::default();

        result.language_patterns = VocabularySummarizer {
            top_n: settings.vocabulary_size,
            min_word_chars: settings.min_word_chars,
        }
        .summarize(comments);

        for (index, comment) in comments.iter().enumerate() {
            let text = comment.text.to_lowercase();
            if text.chars().count() <= settings.min_text_chars {
                continue;
            }

            let engagement = engagement(comment);

            // The engagement gate only decides whether the insight is kept;
            // the comment is claimed by its category either way.
            if let Some(category) = classify::classify_category(&text) {
                if engagement > settings.min_category_engagement {
                    result.category_mut(category).push(Insight {
                        text: comment.text.clone(),
                        likes: comment.likes,
                        replies: comment.reply_count(),
                        author: comment.author_or_anonymous().to_string(),
                    });
                }
            }

            if classify::is_pain_point(&text) {
                result.pain_points.push(RankedComment {
                    text: comment.text.clone(),
                    engagement,
                });
            }

            let score = self
                .oracle
                .score_text(&text)
                .map_err(|source| AnalysisError::Oracle { index, source })?;
            // Also rejects NaN, which no range contains
            if !(-1.0..=1.0).contains(&score.polarity) {
                return Err(AnalysisError::Oracle {
                    index,
                    source: anyhow::anyhow!("polarity {} is outside [-1, 1]", score.polarity),
                });
            }

            let ranked = RankedComment {
                text: comment.text.clone(),
                engagement,
            };
            match Tone::from_polarity(score.polarity, settings.polarity_threshold) {
                Tone::Positive => result.sentiment.positive.push(ranked),
                Tone::Negative => result.sentiment.negative.push(ranked),
                Tone::Neutral => {}
            }
        }

        result.future_topics = FutureTopicExtractor {
            max_topics: settings.future_topic_cap,
        }
        .extract(comments);

        for category in Category::ALL {
            let bucket = std::mem::take(result.category_mut(category));
            *result.category_mut(category) =
                top_k_by(bucket, settings.category_cap, Insight::engagement);
        }
        result.pain_points = top_k_by(
            std::mem::take(&mut result.pain_points),
            settings.pain_point_cap,
            |c| c.engagement,
        );
        result.sentiment.positive = top_k_by(
            std::mem::take(&mut result.sentiment.positive),
            settings.sentiment_cap,
            |c| c.engagement,
        );
        result.sentiment.negative = top_k_by(
            std::mem::take(&mut result.sentiment.negative),
            settings.sentiment_cap,
            |c| c.engagement,
        );

        info!(
            think = result.think.len(),
            feel = result.feel.len(),
            act = result.act.len(),
            pain_points = result.pain_points.len(),
            "Analysis complete"
        );

        Ok(result)
    }
}

fn parse_records(records: &[serde_json::Value]) -> Result<Vec<Comment>, AnalysisError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            Comment::deserialize(record)
                .map_err(|source| AnalysisError::MalformedComment { index, source })
        })
        .collect()
}

fn fail_closed(e: AnalysisError) -> AnalysisResult {
    error!(error = %e, "Comment analysis failed, returning empty result");
    AnalysisResult::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::traits::SentimentScore;

    /// Scores every text with the same polarity.
    struct FixedOracle(f64);

    impl SentimentOracle for FixedOracle {
        fn score_text(&self, _text: &str) -> anyhow::Result<SentimentScore> {
            Ok(SentimentScore {
                polarity: self.0,
                subjectivity: 0.5,
            })
        }
    }

    fn aggregator(polarity: f64) -> InsightAggregator {
        InsightAggregator::new(Arc::new(FixedOracle(polarity)))
    }

    #[test]
    fn test_default_settings_match_thresholds() {
        let settings = AnalyzerSettings::default();
        assert_eq!(settings.min_text_chars, 30);
        assert_eq!(settings.min_category_engagement, 2);
        assert!((settings.polarity_threshold - 0.3).abs() < f64::EPSILON);
        assert_eq!(
            (settings.category_cap, settings.pain_point_cap, settings.sentiment_cap),
            (4, 5, 3)
        );
    }

    #[test]
    fn test_engagement_gate_does_not_reassign_category() {
        // "love" is feel; "buy" is act. Engagement 0 drops the feel insight
        // but must not let act claim the comment.
        let comments = vec![Comment::new("i love this so much and i will buy it again", 0)];
        let result = aggregator(0.0).analyze(&comments);
        assert!(result.feel.is_empty());
        assert!(result.act.is_empty());
    }

    #[test]
    fn test_non_finite_polarity_fails_closed() {
        let comments = vec![Comment::new("this is a perfectly long enough comment text", 9)];
        let err = aggregator(f64::NAN).try_analyze(&comments).unwrap_err();
        assert!(matches!(err, AnalysisError::Oracle { index: 0, .. }));
        assert!(aggregator(f64::NAN).analyze(&comments).is_empty());
    }

    #[test]
    fn test_out_of_range_polarity_fails_closed() {
        let comments = vec![Comment::new("this is a perfectly long enough comment text", 9)];
        for polarity in [5.0, -1.5, f64::INFINITY] {
            let err = aggregator(polarity).try_analyze(&comments).unwrap_err();
            assert!(matches!(err, AnalysisError::Oracle { index: 0, .. }));
        }
        // The bounds themselves are valid
        assert!(aggregator(1.0).try_analyze(&comments).is_ok());
        assert!(aggregator(-1.0).try_analyze(&comments).is_ok());
    }

    #[test]
    fn test_malformed_record_fails_closed() {
        let records = vec![
            serde_json::json!({"text": "a perfectly fine comment that is long enough", "likes": 5}),
            serde_json::json!({"likes": 5}),
        ];
        let result = aggregator(0.9).analyze_records(&records);
        assert!(result.is_empty());
    }

    #[test]
    fn test_records_parse_when_valid() {
        let records = vec![serde_json::json!({
            "text": "I think the next update could be a big deal for everyone",
            "likes": 5,
            "author": "viewer"
        })];
        let result = aggregator(0.0).analyze_records(&records);
        assert_eq!(result.think.len(), 1);
        assert_eq!(result.think[0].author, "viewer");
    }
}
