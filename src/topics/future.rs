// Future topic extraction: forward-looking sentences from comments.
//
// Sentences are split on periods in the raw (original case) comment text. A
// sentence that mentions a wish, a need, or what comes next is a candidate.
// Candidates are kept in document order and the first few are returned.
//
// Unlike every other bucket this one is first-N, not top-k by engagement,
// and each topic carries a placeholder engagement of 1.

use serde::{Deserialize, Serialize};

use crate::classify::rules::rules;
use crate::comments::Comment;

/// Engagement reported for every future topic.
pub const PLACEHOLDER_ENGAGEMENT: u64 = 1;

/// A sentence hinting at a feature or topic people want next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FutureTopic {
    pub topic: String,
    pub engagement: u64,
}

pub struct FutureTopicExtractor {
    /// Maximum number of topics returned
    pub max_topics: usize,
}

impl Default for FutureTopicExtractor {
    fn default() -> Self {
        Self { max_topics: 5 }
    }
}

impl FutureTopicExtractor {
    pub fn extract(&self, comments: &[Comment]) -> Vec<FutureTopic> {
        let cue = rules().future_cue_rule();

        comments
            .iter()
            .flat_map(|comment| comment.text.split('.'))
            .filter(|sentence| cue.is_match(sentence))
            .take(self.max_topics)
            .map(|sentence| FutureTopic {
                topic: sentence.trim().to_string(),
                engagement: PLACEHOLDER_ENGAGEMENT,
            })
            .collect()
    }
}
