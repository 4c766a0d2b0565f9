// Comment model: the input records the engine analyzes.
//
// Comments arrive already collected (scraper output or a JSON file on disk).
// The engine only reads them; nothing here is mutated during analysis.

use serde::{Deserialize, Serialize};

/// Author name used when a comment carries none.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// A single top-level comment from a social media thread.
///
/// Only `text` is required. Everything else falls back to the scraper
/// defaults: no author, zero likes, no replies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub likes: u64,
    /// Replies are counted, never inspected, so any JSON value is accepted
    #[serde(default)]
    pub replies: Vec<serde_json::Value>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl Comment {
    /// Build a comment with just text and likes. Handy for tests and for
    /// callers that don't track authors or replies.
    pub fn new(text: impl Into<String>, likes: u64) -> Self {
        Self {
            text: text.into(),
            author: None,
            likes,
            replies: Vec::new(),
            timestamp: None,
        }
    }

    /// Attach `count` empty replies.
    pub fn with_replies(mut self, count: usize) -> Self {
        self.replies = vec![serde_json::Value::Null; count];
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// The display author, falling back to "Anonymous".
    pub fn author_or_anonymous(&self) -> &str {
        self.author.as_deref().unwrap_or(ANONYMOUS_AUTHOR)
    }

    pub fn reply_count(&self) -> u64 {
        self.replies.len() as u64
    }
}

/// The shape a batch file may take on disk: either a bare array of
/// comments, or the scraper's envelope with a `comments` array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CommentBatch {
    Bare(Vec<serde_json::Value>),
    Envelope { comments: Vec<serde_json::Value> },
}

impl CommentBatch {
    /// The raw records, still unvalidated. Validation happens inside the
    /// engine so a malformed record takes the fail-closed path.
    pub fn into_records(self) -> Vec<serde_json::Value> {
        match self {
            CommentBatch::Bare(records) => records,
            CommentBatch::Envelope { comments } => comments,
        }
    }
}
