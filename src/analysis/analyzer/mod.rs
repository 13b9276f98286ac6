//! Analyzer implementations that combine char filters, tokenizers and filters.

pub mod analyzer;
pub mod pipeline;
pub mod review;

pub use analyzer::Analyzer;
pub use pipeline::PipelineAnalyzer;
pub use review::ReviewAnalyzer;
