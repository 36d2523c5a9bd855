//! Motif record — one motif's census statistics.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::NodeId;

/// Opaque canonical motif identifier, as assigned by the census from the
/// motif's adjacency matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MotifId(pub u64);

impl std::fmt::Display for MotifId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Census statistics for one motif.
///
/// Construction sets only the identity. Every statistic stays unset until
/// the enumeration engine writes it; `NetworkStats::render` refuses to
/// format a motif whose rendered fields are still `None`.
///
/// The weight statistics are only meaningful for weighted networks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Motif {
    pub id: MotifId,
    /// Occurrence count in the real network.
    pub real_count: Option<u64>,
    /// Distinct member node-tuples observed across occurrences.
    pub members: BTreeSet<Vec<NodeId>>,
    /// Occurrence counts from each randomized network, in sample order.
    pub random_samples: Vec<u64>,
    pub random_mean: Option<f64>,
    pub random_sd: Option<f64>,
    pub real_zscore: Option<f64>,
    pub mean_weight: Option<f64>,
    pub sd_weight: Option<f64>,
    pub median_weight: Option<f64>,
    pub first_quartile_weight: Option<f64>,
    pub third_quartile_weight: Option<f64>,
}

impl Motif {
    pub fn new(id: MotifId) -> Self {
        Self {
            id,
            real_count: None,
            members: BTreeSet::new(),
            random_samples: Vec::new(),
            random_mean: None,
            random_sd: None,
            real_zscore: None,
            mean_weight: None,
            sd_weight: None,
            median_weight: None,
            first_quartile_weight: None,
            third_quartile_weight: None,
        }
    }

    /// Number of distinct member tuples recorded so far.
    pub fn distinct_count(&self) -> usize {
        self.members.len()
    }
}
