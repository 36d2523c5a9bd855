//! Per-network census aggregate.
//!
//! `NetworkStats` owns every `Motif` and `Participation` record for one
//! analysis run. Registration creates empty records keyed for lookup; the
//! enumeration engine then mutates the records in place through the `*_mut`
//! accessors; `render` reads the whole aggregate into the report text.
//!
//! There is no deletion and no interior locking — one run, one owner. Any
//! upstream parallelism must finish all record writes before `render`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::literature::LiteratureTable;
use crate::model::{LinkId, Motif, MotifId, NetworkType, NodeId, Participation};
use crate::report;
use crate::Result;

/// Accumulated census statistics for a single network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkStats {
    /// Motif order being censused (nodes per motif).
    pub motif_size: u32,
    pub network_type: NetworkType,
    /// Render weight sums instead of integer counts.
    pub weighted: bool,
    /// Translate motif ids through the literature table at render time.
    pub use_literature_ids: bool,
    motifs: BTreeMap<MotifId, Motif>,
    nodes: BTreeMap<NodeId, Participation>,
    links: BTreeMap<LinkId, Participation>,
}

impl NetworkStats {
    pub fn new(motif_size: u32, network_type: NetworkType) -> Self {
        Self {
            motif_size,
            network_type,
            weighted: false,
            use_literature_ids: false,
            motifs: BTreeMap::new(),
            nodes: BTreeMap::new(),
            links: BTreeMap::new(),
        }
    }

    /// Render weight sums in the participation tables.
    pub fn with_weights(mut self) -> Self {
        self.weighted = true;
        self
    }

    /// Show literature labels instead of canonical motif ids where the
    /// lookup table maps them.
    pub fn with_literature_ids(mut self) -> Self {
        self.use_literature_ids = true;
        self
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register a motif with an empty record. Registering the same id twice
    /// is a caller error: the call is a no-op and the existing record is
    /// kept untouched.
    pub fn add_motif(&mut self, id: MotifId) {
        if self.motifs.contains_key(&id) {
            tracing::warn!(motif = %id, "motif registered more than once; keeping existing record");
            return;
        }
        self.motifs.insert(id, Motif::new(id));
    }

    /// Register a node under `key`, displayed as `label` in reports.
    /// Duplicate keys behave as in [`add_motif`](Self::add_motif).
    pub fn add_node(&mut self, key: NodeId, label: Option<&str>) {
        if self.nodes.contains_key(&key) {
            tracing::warn!(node = %key, "node registered more than once; keeping existing record");
            return;
        }
        self.nodes.insert(key, Participation::new(label));
    }

    /// Register a link under `key`, displayed as `label` in reports.
    /// Duplicate keys behave as in [`add_motif`](Self::add_motif).
    pub fn add_link(&mut self, key: LinkId, label: Option<&str>) {
        if self.links.contains_key(&key) {
            tracing::warn!(link = %key, "link registered more than once; keeping existing record");
            return;
        }
        self.links.insert(key, Participation::new(label));
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn motif(&self, id: MotifId) -> Option<&Motif> {
        self.motifs.get(&id)
    }

    pub fn motif_mut(&mut self, id: MotifId) -> Option<&mut Motif> {
        self.motifs.get_mut(&id)
    }

    pub fn node(&self, key: NodeId) -> Option<&Participation> {
        self.nodes.get(&key)
    }

    pub fn node_mut(&mut self, key: NodeId) -> Option<&mut Participation> {
        self.nodes.get_mut(&key)
    }

    pub fn link(&self, key: LinkId) -> Option<&Participation> {
        self.links.get(&key)
    }

    pub fn link_mut(&mut self, key: LinkId) -> Option<&mut Participation> {
        self.links.get_mut(&key)
    }

    /// All registered motifs, keyed by id (iteration is id-ascending).
    pub fn motifs(&self) -> &BTreeMap<MotifId, Motif> {
        &self.motifs
    }

    /// All registered nodes, keyed by registration key.
    pub fn nodes(&self) -> &BTreeMap<NodeId, Participation> {
        &self.nodes
    }

    /// All registered links, keyed by registration key.
    pub fn links(&self) -> &BTreeMap<LinkId, Participation> {
        &self.links
    }

    // ========================================================================
    // Report
    // ========================================================================

    /// Serialize the aggregate as the census report text.
    ///
    /// Pure read — the aggregate is unchanged and may be rendered again.
    /// See [`report::render`] for the format contract.
    pub fn render(&self, literature: &LiteratureTable) -> Result<String> {
        report::render(self, literature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_creates_empty_records() {
        let mut stats = NetworkStats::new(3, NetworkType::Directed);
        stats.add_motif(MotifId(12));
        stats.add_node(NodeId(1), Some("a"));
        stats.add_link(LinkId(1), Some("a->b"));

        assert_eq!(stats.motifs().len(), 1);
        assert_eq!(stats.motif(MotifId(12)).unwrap().real_count, None);
        assert_eq!(stats.node(NodeId(1)).unwrap().label.as_deref(), Some("a"));
        assert!(stats.link(LinkId(1)).unwrap().motif_counts.is_empty());
    }

    #[test]
    fn test_duplicate_motif_is_noop() {
        let mut stats = NetworkStats::new(3, NetworkType::Directed);
        stats.add_motif(MotifId(12));
        stats.motif_mut(MotifId(12)).unwrap().real_count = Some(7);

        stats.add_motif(MotifId(12));

        assert_eq!(stats.motifs().len(), 1);
        assert_eq!(stats.motif(MotifId(12)).unwrap().real_count, Some(7));
    }

    #[test]
    fn test_duplicate_node_keeps_first_label() {
        let mut stats = NetworkStats::new(3, NetworkType::Undirected);
        stats.add_node(NodeId(4), Some("first"));
        stats.add_node(NodeId(4), Some("second"));

        assert_eq!(stats.nodes().len(), 1);
        assert_eq!(stats.node(NodeId(4)).unwrap().label.as_deref(), Some("first"));
    }

    #[test]
    fn test_builder_flags() {
        let stats = NetworkStats::new(3, NetworkType::Bipartite)
            .with_weights()
            .with_literature_ids();
        assert!(stats.weighted);
        assert!(stats.use_literature_ids);
        assert_eq!(stats.motif_size, 3);
    }
}
