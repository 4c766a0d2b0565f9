// Engagement signal: likes plus replies.
//
// Engagement is the one popularity signal the engine ranks by. It is never
// stored on its own; it is recomputed wherever a sort key is needed.

use crate::comments::Comment;

/// Compute a comment's engagement: `likes + number of replies`.
pub fn engagement(comment: &Comment) -> u64 {
    comment.likes.saturating_add(comment.reply_count())
}

/// Order a batch by engagement, most engaged first.
///
/// The key is `(engagement, likes)` so that between two comments with the
/// same engagement, the one with more direct likes ranks higher. The sort is
/// stable: full ties keep their input order.
pub fn rank_by_engagement(comments: &[Comment]) -> Vec<&Comment> {
    let mut ranked: Vec<&Comment> = comments.iter().collect();
    ranked.sort_by(|a, b| {
        (engagement(b), b.likes).cmp(&(engagement(a), a.likes))
    });
    ranked
}

/// Mean engagement across a batch. Returns 0.0 for an empty batch.
pub fn average_engagement(comments: &[Comment]) -> f64 {
    if comments.is_empty() {
        return 0.0;
    }
    let total: f64 = comments.iter().map(|c| engagement(c) as f64).sum();
    total / comments.len() as f64
}
