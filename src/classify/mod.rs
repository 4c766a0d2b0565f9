// Pattern classifier: Think/Feel/Act categories and pain point detection.
//
// Classification is short-circuiting: categories are tried in precedence
// order (think, feel, act) and the first rule that matches anywhere in the
// text decides. Unmatched text is simply uncategorized; nothing here fails.

pub mod rules;

use std::fmt;

use serde::{Deserialize, Serialize};

use self::rules::rules;

/// Cognitive-intent category of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Think,
    Feel,
    Act,
}

impl Category {
    /// All categories in precedence order.
    pub const ALL: [Category; 3] = [Category::Think, Category::Feel, Category::Act];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Think => "think",
            Category::Feel => "feel",
            Category::Act => "act",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which rule claimed a comment: the category and the rule's position
/// within that category's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleHit {
    pub category: Category,
    pub rule_index: usize,
}

/// Find the first category rule that fires on `text`.
pub fn first_category_hit(text: &str) -> Option<RuleHit> {
    for (category, category_rules) in rules().category_rules() {
        if let Some(rule_index) = category_rules.iter().position(|r| r.is_match(text)) {
            return Some(RuleHit {
                category,
                rule_index,
            });
        }
    }
    None
}

/// Decide the Think/Feel/Act category of a (lower-cased) comment body.
pub fn classify_category(text: &str) -> Option<Category> {
    first_category_hit(text).map(|hit| hit.category)
}

/// Does the text mention a problem or complaint?
pub fn is_pain_point(text: &str) -> bool {
    rules().pain_point_rules().iter().any(|r| r.is_match(text))
}

/// Positive cue words. Informational only: sentiment buckets are driven by
/// the sentiment oracle's polarity, never by these cues.
pub fn has_positive_cue(text: &str) -> bool {
    rules().positive_cue_rules().iter().any(|r| r.is_match(text))
}

/// Negative cue words. Informational only, like [`has_positive_cue`].
pub fn has_negative_cue(text: &str) -> bool {
    rules().negative_cue_rules().iter().any(|r| r.is_match(text))
}
