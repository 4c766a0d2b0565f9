// commentlens: marketing insights from social media comment threads
//
// This is the library root. Each module corresponds to a stage of the
// comment analysis engine, plus the configuration and output layers used
// by the command-line front end.

pub mod analysis;
pub mod classify;
pub mod comments;
pub mod config;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod sentiment;
pub mod topics;
