pub mod config;
pub mod feature;
pub mod report;
pub mod scoring;
pub mod stats;
