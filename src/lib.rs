pub mod analyzer;
pub mod batch;
pub mod config;
pub mod errors;
pub mod evaluation;
pub mod keywords;
pub mod submission;
pub mod weights;
