// Pipelines that drive the engine from the command line.

pub mod batch;
