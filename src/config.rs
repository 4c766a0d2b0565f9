use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::analysis::AnalyzerSettings;

/// Default number of batch files analyzed at once.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// variable is optional; unset ones keep the analyzer's defaults.
#[derive(Debug)]
pub struct Config {
    /// Thresholds and caps handed to the aggregator
    pub settings: AnalyzerSettings,
    /// How many batch files to analyze in parallel
    pub concurrency: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let mut settings = AnalyzerSettings::default();

        if let Some(chars) = parse_var::<usize>("COMMENTLENS_MIN_TEXT_CHARS")? {
            settings.min_text_chars = chars;
        }
        if let Some(engagement) = parse_var::<u64>("COMMENTLENS_MIN_ENGAGEMENT")? {
            settings.min_category_engagement = engagement;
        }
        if let Some(threshold) = parse_var::<f64>("COMMENTLENS_POLARITY_THRESHOLD")? {
            if !(0.0..1.0).contains(&threshold) {
                anyhow::bail!(
                    "COMMENTLENS_POLARITY_THRESHOLD must be in [0.0, 1.0), got {threshold}"
                );
            }
            settings.polarity_threshold = threshold;
        }

        let concurrency =
            parse_var::<usize>("COMMENTLENS_CONCURRENCY")?.unwrap_or(DEFAULT_CONCURRENCY);

        let config = Self {
            settings,
            concurrency,
        };
        config.require_concurrency()?;
        Ok(config)
    }

    /// Override concurrency from the command line.
    pub fn with_concurrency(mut self, concurrency: Option<usize>) -> Result<Self> {
        if let Some(n) = concurrency {
            self.concurrency = n;
        }
        self.require_concurrency()?;
        Ok(self)
    }

    fn require_concurrency(&self) -> Result<()> {
        if self.concurrency == 0 {
            anyhow::bail!(
                "Concurrency must be at least 1.\n\
                 Check COMMENTLENS_CONCURRENCY in your .env file or the --concurrency flag."
            );
        }
        Ok(())
    }
}

/// Read and parse an optional environment variable.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => {
            let value = raw
                .trim()
                .parse::<T>()
                .with_context(|| format!("{name} has an invalid value: {raw:?}"))?;
            Ok(Some(value))
        }
        Err(_) => Ok(None),
    }
}
