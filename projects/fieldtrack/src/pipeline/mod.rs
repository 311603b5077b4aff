// Execution-unit scaffold for the video analytics pipeline

pub mod invoker;
pub mod registry;
pub mod types;
pub mod units;
