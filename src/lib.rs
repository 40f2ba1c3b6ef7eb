pub mod analysis;
pub mod config;
pub mod dataset;
pub mod error;
pub mod pipeline;
pub mod reporting;
pub mod serialize;
pub mod types;
