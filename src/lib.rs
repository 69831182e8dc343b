pub mod affixes;
pub mod cli;
pub mod config;
pub mod errors;
pub mod leet;
pub mod logger;
pub mod metrics;
pub mod mutator;
pub mod padding;
pub mod runner;
pub mod writer;
