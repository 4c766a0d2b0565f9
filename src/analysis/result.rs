// Analysis result types: the fixed-shape output of one analysis call.
//
// Every field is always present. An empty batch and a failed analysis both
// produce `AnalysisResult::default()`, which has every bucket empty.

use serde::{Deserialize, Serialize};

use crate::classify::Category;
use crate::topics::future::FutureTopic;
use crate::topics::vocabulary::VocabularyEntry;

/// A categorized comment kept as evidence for a Think/Feel/Act bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub text: String,
    pub likes: u64,
    /// Number of replies, not the replies themselves
    pub replies: u64,
    pub author: String,
}

impl Insight {
    pub fn engagement(&self) -> u64 {
        self.likes.saturating_add(self.replies)
    }
}

/// A comment paired with its engagement. Used by the pain point and
/// sentiment buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedComment {
    pub text: String,
    pub engagement: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentBuckets {
    pub positive: Vec<RankedComment>,
    pub negative: Vec<RankedComment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub think: Vec<Insight>,
    pub feel: Vec<Insight>,
    pub act: Vec<Insight>,
    /// Reserved by the report format; never populated
    pub trending_topics: Vec<RankedComment>,
    /// Reserved by the report format; never populated
    pub high_engagement_comments: Vec<RankedComment>,
    pub pain_points: Vec<RankedComment>,
    pub future_topics: Vec<FutureTopic>,
    pub language_patterns: Vec<VocabularyEntry>,
    pub sentiment: SentimentBuckets,
}

impl AnalysisResult {
    /// The bucket for one category.
    pub fn category(&self, category: Category) -> &[Insight] {
        match category {
            Category::Think => &self.think,
            Category::Feel => &self.feel,
            Category::Act => &self.act,
        }
    }

    pub(crate) fn category_mut(&mut self, category: Category) -> &mut Vec<Insight> {
        match category {
            Category::Think => &mut self.think,
            Category::Feel => &mut self.feel,
            Category::Act => &mut self.act,
        }
    }

    /// True when every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.think.is_empty()
            && self.feel.is_empty()
            && self.act.is_empty()
            && self.trending_topics.is_empty()
            && self.high_engagement_comments.is_empty()
            && self.pain_points.is_empty()
            && self.future_topics.is_empty()
            && self.language_patterns.is_empty()
            && self.sentiment.positive.is_empty()
            && self.sentiment.negative.is_empty()
    }
}

/// Batch-level facts reported alongside the analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Number of comments in the input batch
    pub total_comments: usize,
    /// RFC 3339 timestamp of when the analysis ran
    pub analyzed_at: String,
}

/// The envelope the front end emits around one analysis call.
///
/// The analysis buckets sit at the top level next to the input comments,
/// which are echoed back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightReport {
    pub success: bool,
    pub comments: Vec<serde_json::Value>,
    #[serde(flatten)]
    pub analysis: AnalysisResult,
    pub metadata: ReportMetadata,
}

impl InsightReport {
    pub fn new(comments: Vec<serde_json::Value>, analysis: AnalysisResult) -> Self {
        Self {
            success: true,
            metadata: ReportMetadata {
                total_comments: comments.len(),
                analyzed_at: chrono::Utc::now().to_rfc3339(),
            },
            comments,
            analysis,
        }
    }
}
