use serde::{Deserialize, Serialize};

use crate::similarity;

/// A group of error messages whose pairwise similarity to the representative
/// exceeds the clustering threshold. Serialized field names are part of the
/// artifact contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCluster {
    #[serde(rename = "pattern")]
    pub representative: String,
    /// Total group size, representative included.
    #[serde(rename = "count")]
    pub member_count: usize,
    #[serde(rename = "similar_messages")]
    pub members: Vec<String>,
}

/// Greedily partition error messages into disjoint similarity clusters.
///
/// Messages are visited in original order. For each index not yet assigned to
/// a cluster, every other unassigned index whose cosine similarity exceeds
/// `threshold` joins it; a cluster is emitted only when at least one index
/// besides the representative matched. A message whose sole match is itself
/// stays unassigned and may still be absorbed by a later cluster.
pub fn cluster_errors(
    messages: &[String],
    threshold: f64,
    max_vocabulary: usize,
) -> Vec<ErrorCluster> {
    if messages.len() < 2 {
        return Vec::new();
    }
    let vectors = similarity::vectorize(messages, max_vocabulary);
    let matrix = similarity::similarity_matrix(&vectors);

    let mut clusters = Vec::new();
    let mut assigned = vec![false; messages.len()];
    for i in 0..messages.len() {
        if assigned[i] {
            continue;
        }
        let matched: Vec<usize> = (0..messages.len())
            .filter(|&j| !assigned[j] && matrix[i][j] > threshold)
            .collect();
        if matched.len() > 1 {
            clusters.push(ErrorCluster {
                representative: messages[i].clone(),
                member_count: matched.len(),
                members: matched
                    .iter()
                    .filter(|&&j| j != i)
                    .map(|&j| messages[j].clone())
                    .collect(),
            });
            for j in matched {
                assigned[j] = true;
            }
        }
    }
    clusters
}
