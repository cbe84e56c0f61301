use std::path::PathBuf;

/// Explicit pipeline configuration. The pipeline is a pure function of its
/// input text plus this value; nothing is read from ambient process state.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Case-insensitive regexes that classify a line as an error.
    pub error_patterns: Vec<String>,
    /// Cosine similarity above which two error messages are grouped.
    pub similarity_threshold: f64,
    /// Cap on the number of distinct terms kept in the TF-IDF vocabulary.
    pub max_vocabulary: usize,
    /// Minimum hourly error count (exclusive) before a peak is reported.
    pub peak_hour_threshold: usize,
    /// Minimum cluster size (representative included) that triggers a
    /// frequent-error recommendation.
    pub frequent_error_min: usize,
    /// Directory analysis artifacts are written into.
    pub output_dir: PathBuf,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            error_patterns: ["ERROR", "FATAL", "EXCEPTION", "FAILED", "CRITICAL", "WARNING"]
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            similarity_threshold: 0.8,
            max_vocabulary: 1000,
            peak_hour_threshold: 10,
            frequent_error_min: 3,
            output_dir: PathBuf::from("analysis_results"),
        }
    }
}
