// Colored terminal output for insight reports.
//
// This module handles all terminal-specific formatting. The main.rs command
// handlers delegate here.

use colored::Colorize;

use crate::analysis::result::{Insight, InsightReport, RankedComment};
use crate::classify::rules::RuleSet;
use crate::classify::{Category, RuleHit};
use crate::comments::Comment;
use crate::scoring::engagement::{average_engagement, engagement, rank_by_engagement};
use crate::sentiment::traits::SentimentScore;

use super::{single_line, truncate_chars};

const PREVIEW_CHARS: usize = 120;

/// Display a full insight report for one batch.
pub fn display_report(source: &str, report: &InsightReport, comments: &[Comment]) {
    let analysis = &report.analysis;

    println!(
        "\n{}",
        format!(
            "=== Insights for {} ({} comments) ===",
            source, report.metadata.total_comments
        )
        .bold()
    );
    println!(
        "  {}",
        format!(
            "Analyzed at {}, average engagement {:.1}",
            report.metadata.analyzed_at,
            average_engagement(comments)
        )
        .dimmed()
    );

    for category in Category::ALL {
        display_insights(category, analysis.category(category));
    }

    display_ranked("Pain points", &analysis.pain_points, |s| s.yellow());
    display_ranked("Positive sentiment", &analysis.sentiment.positive, |s| {
        s.green()
    });
    display_ranked("Negative sentiment", &analysis.sentiment.negative, |s| {
        s.red()
    });

    if !analysis.future_topics.is_empty() {
        println!("\n  {}", "Future topics".bold());
        for topic in &analysis.future_topics {
            println!(
                "    - {}",
                truncate_chars(&single_line(&topic.topic), PREVIEW_CHARS)
            );
        }
    }

    if !analysis.language_patterns.is_empty() {
        let words: Vec<String> = analysis
            .language_patterns
            .iter()
            .map(|entry| format!("{} ({})", entry.word, entry.count))
            .collect();
        println!("\n  {}", "Trending vocabulary".bold());
        println!("    {}", words.join(", ").dimmed());
    }

    display_most_engaged(comments, 3);

    if analysis.is_empty() && report.metadata.total_comments > 0 {
        println!(
            "\n  {} No insights produced. Run with RUST_LOG=commentlens=debug for details.",
            "!".yellow()
        );
    }
}

fn display_insights(category: Category, insights: &[Insight]) {
    if insights.is_empty() {
        return;
    }

    println!("\n  {}", colorize_category(category));
    for (i, insight) in insights.iter().enumerate() {
        let preview = truncate_chars(&single_line(&insight.text), PREVIEW_CHARS);
        println!(
            "    {}. [{} likes, {} replies] @{} {}",
            i + 1,
            insight.likes,
            insight.replies,
            insight.author,
            preview.dimmed()
        );
    }
}

fn display_ranked<F>(title: &str, items: &[RankedComment], paint: F)
where
    F: Fn(&str) -> colored::ColoredString,
{
    if items.is_empty() {
        return;
    }

    println!("\n  {}", paint(title).bold());
    for (i, item) in items.iter().enumerate() {
        let preview = truncate_chars(&single_line(&item.text), PREVIEW_CHARS);
        println!(
            "    {}. [engagement {}] {}",
            i + 1,
            item.engagement,
            preview.dimmed()
        );
    }
}

/// The batch's top comments by raw engagement, whether or not they landed
/// in any bucket.
fn display_most_engaged(comments: &[Comment], count: usize) {
    let ranked = rank_by_engagement(comments);
    if ranked.is_empty() {
        return;
    }

    println!("\n  {}", "Most engaged comments".bold());
    for comment in ranked.into_iter().take(count) {
        let preview = truncate_chars(&single_line(&comment.text), PREVIEW_CHARS);
        println!(
            "    {:>5}  @{:<20} {}",
            engagement(comment),
            comment.author_or_anonymous(),
            preview.dimmed()
        );
    }
}

/// Display the classifier's rule tables in precedence order.
pub fn display_rules(rules: &RuleSet) {
    println!("\n{}", "=== Classification rules (first match wins) ===".bold());

    for (category, category_rules) in rules.category_rules() {
        println!("\n  {}", colorize_category(category));
        for (i, rule) in category_rules.iter().enumerate() {
            println!("    {}. {}", i + 1, rule.as_str().dimmed());
        }
    }

    let tables = [
        ("Pain points", rules.pain_point_rules()),
        ("Positive cues (informational)", rules.positive_cue_rules()),
        ("Negative cues (informational)", rules.negative_cue_rules()),
    ];
    for (title, table) in tables {
        println!("\n  {}", title.bold());
        for (i, rule) in table.iter().enumerate() {
            println!("    {}. {}", i + 1, rule.as_str().dimmed());
        }
    }

    println!("\n  {}", "Future topic cue".bold());
    println!("    {}", rules.future_cue_rule().as_str().dimmed());
}

/// Verdicts for a single piece of text.
pub struct TextVerdict {
    pub hit: Option<RuleHit>,
    pub pain_point: bool,
    pub positive_cue: bool,
    pub negative_cue: bool,
    pub sentiment: SentimentScore,
}

/// Display how the classifier and the oracle see one text.
pub fn display_verdict(text: &str, verdict: &TextVerdict) {
    println!("\n{}", format!("\"{}\"", truncate_chars(text, PREVIEW_CHARS)).bold());

    match verdict.hit {
        Some(hit) => println!(
            "  Category: {} (rule {})",
            colorize_category(hit.category),
            hit.rule_index + 1
        ),
        None => println!("  Category: {}", "none".dimmed()),
    }
    println!("  Pain point: {}", yes_no(verdict.pain_point));
    println!(
        "  Cue words: positive {}, negative {}",
        yes_no(verdict.positive_cue),
        yes_no(verdict.negative_cue)
    );
    println!(
        "  Polarity: {:+.3}  Subjectivity: {:.3}",
        verdict.sentiment.polarity, verdict.sentiment.subjectivity
    );
}

fn yes_no(flag: bool) -> colored::ColoredString {
    if flag {
        "yes".green()
    } else {
        "no".normal()
    }
}

/// Colorize a category heading.
fn colorize_category(category: Category) -> colored::ColoredString {
    match category {
        Category::Think => "Think".bright_blue().bold(),
        Category::Feel => "Feel".bright_magenta().bold(),
        Category::Act => "Act".bright_green().bold(),
    }
}
