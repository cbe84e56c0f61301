use serde::{Deserialize, Serialize};

use crate::cluster::ErrorCluster;
use crate::temporal::TemporalFinding;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    FrequentError,
    TimePattern,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub message: String,
    pub occurrences: usize,
    pub suggestion: String,
}

/// Turn cluster and temporal findings into ranked advisories: one
/// `frequent_error` per cluster of at least `frequent_error_min` messages, in
/// cluster-discovery order, then the `time_pattern` advisory if a peak hour
/// was found. The advisory strings are fixed; downstream consumers match on
/// them.
pub fn synthesize(
    clusters: &[ErrorCluster],
    finding: Option<&TemporalFinding>,
    frequent_error_min: usize,
) -> Vec<Recommendation> {
    let mut out = Vec::new();
    for cluster in clusters {
        if cluster.member_count >= frequent_error_min {
            out.push(Recommendation {
                kind: RecommendationKind::FrequentError,
                message: format!(
                    "Frequent error pattern detected: {}",
                    cluster.representative
                ),
                occurrences: cluster.member_count,
                suggestion: "Consider implementing error handling or monitoring for this pattern"
                    .to_string(),
            });
        }
    }
    if let Some(f) = finding {
        out.push(Recommendation {
            kind: RecommendationKind::TimePattern,
            message: format!("High error frequency detected during hour {}", f.peak_hour),
            occurrences: f.peak_count,
            suggestion: "Consider investigating system load or scheduled tasks during this time"
                .to_string(),
        });
    }
    out
}
