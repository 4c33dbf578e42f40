pub mod accumulate;
pub mod cli;
pub mod error;
pub mod ingest;
pub mod model;
pub mod render;
pub mod report;
pub mod themes;
