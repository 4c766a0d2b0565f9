// Scoring: engagement signal and top-k selection.

pub mod engagement;
pub mod ranking;
