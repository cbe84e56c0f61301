pub mod analysis;
pub mod cluster;
pub mod config;
pub mod parser;
pub mod persist;
pub mod recommend;
pub mod similarity;
pub mod temporal;

pub use analysis::{analyze, analyze_bytes, AnalysisResult, AnalyzeError};
pub use config::AnalyzerConfig;
