use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cluster::{self, ErrorCluster};
use crate::config::AnalyzerConfig;
use crate::parser::{self, PatternError};
use crate::recommend::{self, Recommendation};
use crate::temporal::{self, TemporalFinding};

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error("input is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),
}

/// The full outcome of one analysis pass, also the artifact shape. Field
/// names and nesting are a contract with artifact consumers; `output_file` is
/// filled in by the caller after persistence, never by `analyze` itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub error_count: usize,
    /// Error message -> occurrence count, descending by count.
    pub error_frequency: IndexMap<String, usize>,
    pub error_groups: Vec<ErrorCluster>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporal: Option<TemporalFinding>,
    pub recommendations: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
}

impl AnalysisResult {
    fn no_errors() -> Self {
        Self {
            status: "success".to_string(),
            message: Some("No errors found in the logs".to_string()),
            error_count: 0,
            error_frequency: IndexMap::new(),
            error_groups: Vec::new(),
            temporal: None,
            recommendations: Vec::new(),
            output_file: None,
        }
    }
}

/// Run the whole pipeline over one in-memory log document. Pure computation,
/// no I/O; fails only on an invalid error pattern.
pub fn analyze(text: &str, cfg: &AnalyzerConfig) -> Result<AnalysisResult, AnalyzeError> {
    let patterns = parser::compile_patterns(&cfg.error_patterns)?;
    let records = parser::parse_lines(text, &patterns);
    let errors: Vec<&parser::LogRecord> = records.iter().filter(|r| r.is_error).collect();
    if errors.is_empty() {
        return Ok(AnalysisResult::no_errors());
    }

    let mut error_frequency: IndexMap<String, usize> = IndexMap::new();
    for r in &errors {
        *error_frequency.entry(r.message.clone()).or_insert(0) += 1;
    }
    // Stable sort: ties keep first-seen order.
    error_frequency.sort_by(|_, a, _, b| b.cmp(a));

    let messages: Vec<String> = errors.iter().map(|r| r.message.clone()).collect();
    let error_groups =
        cluster::cluster_errors(&messages, cfg.similarity_threshold, cfg.max_vocabulary);

    let times: Vec<DateTime<Utc>> = errors.iter().filter_map(|r| r.timestamp).collect();
    let temporal = temporal::peak_error_hour(&times, cfg.peak_hour_threshold);

    let recommendations =
        recommend::synthesize(&error_groups, temporal.as_ref(), cfg.frequent_error_min);

    Ok(AnalysisResult {
        status: "success".to_string(),
        message: None,
        error_count: errors.len(),
        error_frequency,
        error_groups,
        temporal,
        recommendations,
        output_file: None,
    })
}

/// As [`analyze`], but accepts raw bytes and fails with a decode error when
/// they are not valid UTF-8.
pub fn analyze_bytes(bytes: &[u8], cfg: &AnalyzerConfig) -> Result<AnalysisResult, AnalyzeError> {
    let text = std::str::from_utf8(bytes)?;
    analyze(text, cfg)
}
