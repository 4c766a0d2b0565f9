// Corpus-level language analysis: trending vocabulary and future topics.

pub mod future;
pub mod vocabulary;
