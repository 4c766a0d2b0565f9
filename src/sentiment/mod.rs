// Sentiment scoring: trait-based abstraction for swappable oracles.
//
// The SentimentOracle trait defines the interface. LexiconOracle is the
// built-in implementation; the engine only reads the polarity it returns.

pub mod lexicon;
pub mod traits;
