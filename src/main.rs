use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use commentlens::analysis::InsightAggregator;
use commentlens::classify;
use commentlens::config::Config;
use commentlens::output::terminal::{self, TextVerdict};
use commentlens::sentiment::lexicon::LexiconOracle;

/// commentlens: marketing insights from social media comment threads.
///
/// Sorts comments into Think/Feel/Act, pulls out pain points and sentiment,
/// and surfaces trending words and future topic requests.
#[derive(Parser)]
#[command(name = "commentlens", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one or more comment batch files (JSON)
    Analyze {
        /// Files holding an array of comments or an object with a "comments" array
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print the JSON report instead of the terminal summary
        #[arg(long)]
        json: bool,

        /// Number of files to analyze in parallel (default: 4)
        #[arg(long)]
        concurrency: Option<usize>,
    },

    /// Show the classification rules in precedence order
    Rules,

    /// Show how a single piece of text is classified and scored
    Score {
        /// The text to score
        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so JSON on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("commentlens=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            files,
            json,
            concurrency,
        } => {
            let config = Config::load()?.with_concurrency(concurrency)?;
            let aggregator =
                InsightAggregator::new(Arc::new(LexiconOracle::new())).with_settings(config.settings);

            let file_count = files.len();
            let outcomes =
                commentlens::pipeline::batch::run(&aggregator, files, config.concurrency).await?;

            let mut failed = 0usize;
            for outcome in outcomes {
                match outcome {
                    Ok(outcome) if json => {
                        println!("{}", serde_json::to_string_pretty(&outcome.report)?);
                    }
                    Ok(outcome) => {
                        terminal::display_report(&outcome.source, &outcome.report, &outcome.comments);
                    }
                    Err(e) => {
                        failed += 1;
                        eprintln!("{} {e:#}", "Error:".red().bold());
                    }
                }
            }

            info!(files = file_count, failed, "Analysis run finished");
            if failed == file_count {
                anyhow::bail!("No batch files could be analyzed");
            }
        }

        Commands::Rules => {
            terminal::display_rules(classify::rules::rules());
        }

        Commands::Score { text } => {
            let lower = text.to_lowercase();
            let verdict = TextVerdict {
                hit: classify::first_category_hit(&lower),
                pain_point: classify::is_pain_point(&lower),
                positive_cue: classify::has_positive_cue(&lower),
                negative_cue: classify::has_negative_cue(&lower),
                sentiment: LexiconOracle::new().score(&lower),
            };
            terminal::display_verdict(&text, &verdict);
        }
    }

    Ok(())
}
