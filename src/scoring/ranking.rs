// Top-k selection shared by every ranked bucket.

/// Keep the `k` items with the highest key, highest first.
///
/// `Vec::sort_by` is stable, so items with equal keys stay in the order they
/// were inserted. Bucket output depends on that for determinism.
pub fn top_k_by<T, F>(mut items: Vec<T>, k: usize, key: F) -> Vec<T>
where
    F: Fn(&T) -> u64,
{
    items.sort_by(|a, b| key(b).cmp(&key(a)));
    items.truncate(k);
    items
}
