// Batch file pipeline: analyze several comment files in parallel.
//
// Each file is an independent analysis. Files are read asynchronously, the
// analysis itself runs on a blocking worker, and results come back in the
// order the files were given. A file that can't be read or parsed is
// reported on its own without stopping the others.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use tracing::{info, warn};

use crate::analysis::{InsightAggregator, InsightReport};
use crate::comments::{Comment, CommentBatch};

/// One analyzed file.
pub struct BatchOutcome {
    pub source: String,
    pub report: InsightReport,
    /// The records that parsed as comments, kept for display
    pub comments: Vec<Comment>,
}

/// Read a batch file into raw records.
pub async fn load_batch(path: &Path) -> Result<Vec<serde_json::Value>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let batch: CommentBatch = serde_json::from_str(&raw).with_context(|| {
        format!(
            "{} is not a comment batch (expected an array of comments or an object with a \"comments\" array)",
            path.display()
        )
    })?;
    Ok(batch.into_records())
}

/// Analyze every file, at most `concurrency` at a time.
///
/// Returns one result per input path, in input order.
pub async fn run(
    aggregator: &InsightAggregator,
    paths: Vec<PathBuf>,
    concurrency: usize,
) -> Result<Vec<Result<BatchOutcome>>> {
    info!(files = paths.len(), concurrency, "Analyzing comment batches");

    let pb = if paths.len() > 1 {
        let pb = ProgressBar::new(paths.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar().template("  Analyzing [{bar:30}] {pos}/{len} ({eta})")?,
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<Result<BatchOutcome>> = stream::iter(paths.into_iter().map(|path| {
        let aggregator = aggregator.clone();
        async move { analyze_file(aggregator, path).await }
    }))
    .buffered(concurrency.max(1))
    .inspect(|result| {
        if let Err(e) = result {
            warn!(error = %e, "Batch skipped");
        }
        pb.inc(1);
    })
    .collect()
    .await;

    pb.finish_and_clear();
    Ok(results)
}

async fn analyze_file(aggregator: InsightAggregator, path: PathBuf) -> Result<BatchOutcome> {
    let records = load_batch(&path).await?;
    let source = path.display().to_string();

    tokio::task::spawn_blocking(move || {
        let analysis = aggregator.analyze_records(&records);
        let comments: Vec<Comment> = records
            .iter()
            .filter_map(|record| Comment::deserialize(record).ok())
            .collect();

        BatchOutcome {
            report: InsightReport::new(records, analysis),
            source,
            comments,
        }
    })
    .await
    .context("Analysis worker panicked")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::sentiment::lexicon::LexiconOracle;

    const VALID_BARE: &str = r#"[
        {"text": "I love this product so much, best thing I ever bought", "likes": 5},
        {"text": "meh", "likes": 0}
    ]"#;

    const VALID_ENVELOPE: &str = r#"{"comments": [
        {"text": "I will buy another one for my brother next month", "likes": 9}
    ]}"#;

    fn aggregator() -> InsightAggregator {
        InsightAggregator::new(Arc::new(LexiconOracle::new()))
    }

    #[tokio::test]
    async fn test_load_batch_accepts_both_shapes() {
        let dir = tempfile::tempdir().unwrap();
        let bare = dir.path().join("bare.json");
        let envelope = dir.path().join("envelope.json");
        std::fs::write(&bare, VALID_BARE).unwrap();
        std::fs::write(&envelope, VALID_ENVELOPE).unwrap();

        assert_eq!(load_batch(&bare).await.unwrap().len(), 2);
        assert_eq!(load_batch(&envelope).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_load_batch_rejects_other_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("object.json");
        std::fs::write(&path, r#"{"posts": []}"#).unwrap();

        let err = load_batch(&path).await.unwrap_err();
        assert!(format!("{err:#}").contains("not a comment batch"));
    }

    #[tokio::test]
    async fn test_run_keeps_order_and_isolates_failures() {
        let dir = tempfile::tempdir().unwrap();
        let valid = dir.path().join("valid.json");
        let broken = dir.path().join("broken.json");
        let envelope = dir.path().join("envelope.json");
        let missing = dir.path().join("missing.json");
        std::fs::write(&valid, VALID_BARE).unwrap();
        std::fs::write(&broken, "[{\"text\": ").unwrap();
        std::fs::write(&envelope, VALID_ENVELOPE).unwrap();

        let paths = vec![valid.clone(), broken, missing, envelope.clone()];
        let results = run(&aggregator(), paths, 2).await.unwrap();

        assert_eq!(results.len(), 4);
        assert!(results[1].is_err());
        assert!(results[2].is_err());

        let first = results[0].as_ref().unwrap();
        assert_eq!(first.source, valid.display().to_string());
        assert_eq!(first.report.metadata.total_comments, 2);
        assert_eq!(first.comments.len(), 2);
        assert_eq!(first.report.analysis.feel.len(), 1);

        let last = results[3].as_ref().unwrap();
        assert_eq!(last.source, envelope.display().to_string());
        assert_eq!(last.report.analysis.act.len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_record_empties_only_its_file() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.json");
        let good = dir.path().join("good.json");
        std::fs::write(&bad, r#"[{"text": "I love it a lot more than I expected to", "likes": -1}]"#)
            .unwrap();
        std::fs::write(&good, VALID_BARE).unwrap();

        let results = run(&aggregator(), vec![bad, good], 1).await.unwrap();

        let bad = results[0].as_ref().unwrap();
        assert!(bad.report.analysis.is_empty());
        assert_eq!(bad.report.metadata.total_comments, 1);
        assert!(bad.comments.is_empty());

        let good = results[1].as_ref().unwrap();
        assert_eq!(good.report.analysis.feel.len(), 1);
    }
}
