// Rule tables for comment classification.
//
// Each table is an ordered list of regex sources. Order matters: categories
// are checked in declaration order and the first rule that fires decides.
// Sources are matched case-insensitively as a search anywhere in the text.
// `\b` is Unicode-aware, so an accented letter counts as part of a word.

use std::sync::LazyLock;

use regex::Regex;

use super::Category;

/// Think/Feel/Act rules, in precedence order.
pub const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (
        Category::Think,
        &[
            r"\bthink\b|\bbelieve\b|\btheory\b|\bwonder\b|\bmaybe\b|\bperhaps\b|\bpossibly\b|\bspeculate\b",
            r"could be|might be|seems like|appears to|probably|likely|assuming|guess",
            r"what if|imagine if|consider|predict|expect|anticipate|forecast|theorize",
        ],
    ),
    (
        Category::Feel,
        &[
            r"love|hate|amazing|terrible|awesome|awful|great|bad|disappointed|impressed",
            r"excited|worried|concerned|happy|sad|angry|frustrated|pleased|enjoy|annoyed",
            r"cant wait|looking forward|hope|wish|miss|glad|favorite|best|worst",
        ],
    ),
    (
        Category::Act,
        &[
            r"\buse\b|\bbuy\b|\bplay\b|\btry\b|\bstart\b|\bstop\b|\bchange\b|\bswitch\b",
            r"going to|will|planning to|intend to|about to|decided to|committed to",
            r"bought|purchased|ordered|downloaded|installed|uninstalled|removed|added",
        ],
    ),
];

pub const PAIN_POINT_RULES: &[&str] = &[
    r"problem|issue|difficult|hard|confusing|unclear|missing|need|lack|wish|should have",
    r"cant|cannot|unable|impossible|frustrated|annoying|disappointing|limited|broken",
    r"expensive|costly|overpriced|waste|not worth|better if|improve|fix|bug|error",
];

pub const POSITIVE_CUE_RULES: &[&str] = &[
    r"love|great|amazing|awesome|excellent|perfect|best|fantastic|wonderful|brilliant",
    r"helpful|useful|worth|valuable|impressive|good|nice|enjoy|pleased|happy",
];

pub const NEGATIVE_CUE_RULES: &[&str] = &[
    r"hate|terrible|awful|worst|bad|poor|horrible|useless|waste|disappointed",
    r"annoying|frustrating|confusing|difficult|expensive|costly|broken|buggy|error",
];

/// Forward-looking cue words used by the future topic extractor.
pub const FUTURE_CUE_RULE: &str =
    r"should|could|would|wish|hope|want|need|expect|future|next|upcoming";

/// The compiled rule tables. Built once per process and only ever read.
pub struct RuleSet {
    pub(crate) categories: Vec<(Category, Vec<Regex>)>,
    pub(crate) pain_points: Vec<Regex>,
    pub(crate) positive_cues: Vec<Regex>,
    pub(crate) negative_cues: Vec<Regex>,
    pub(crate) future_cue: Regex,
}

static RULES: LazyLock<RuleSet> = LazyLock::new(RuleSet::compile);

/// The process-wide rule tables.
pub fn rules() -> &'static RuleSet {
    &RULES
}

impl RuleSet {
    fn compile() -> Self {
        let categories = CATEGORY_RULES
            .iter()
            .map(|(category, sources)| (*category, compile_all(sources)))
            .collect();

        Self {
            categories,
            pain_points: compile_all(PAIN_POINT_RULES),
            positive_cues: compile_all(POSITIVE_CUE_RULES),
            negative_cues: compile_all(NEGATIVE_CUE_RULES),
            future_cue: compile(FUTURE_CUE_RULE),
        }
    }

    /// Category rules in precedence order, as (category, compiled rules).
    pub fn category_rules(&self) -> impl Iterator<Item = (Category, &[Regex])> {
        self.categories
            .iter()
            .map(|(category, rules)| (*category, rules.as_slice()))
    }

    pub fn pain_point_rules(&self) -> &[Regex] {
        &self.pain_points
    }

    pub fn positive_cue_rules(&self) -> &[Regex] {
        &self.positive_cues
    }

    pub fn negative_cue_rules(&self) -> &[Regex] {
        &self.negative_cues
    }

    pub fn future_cue_rule(&self) -> &Regex {
        &self.future_cue
    }
}

fn compile_all(sources: &[&str]) -> Vec<Regex> {
    sources.iter().map(|source| compile(source)).collect()
}

// The tables above are constants, so a compile failure is a programming
// error caught by the first test run.
fn compile(source: &str) -> Regex {
    Regex::new(&format!("(?i){source}"))
        .unwrap_or_else(|e| panic!("invalid built-in rule {source:?}: {e}"))
}
