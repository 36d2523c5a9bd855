//! Per-entity participation counts. Nodes and links share the record shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::MotifId;

/// Opaque node registration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque link registration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LinkId(pub u64);

impl std::fmt::Display for LinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Structural position a node or link occupies within a motif occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoleId(pub u64);

impl std::fmt::Display for RoleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which kind of entity a participation record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Node,
    Link,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Node => write!(f, "node"),
            EntityKind::Link => write!(f, "link"),
        }
    }
}

/// Motif and role participation counts for one node or link.
///
/// The registration key (`NodeId`/`LinkId`) is the lookup handle during
/// accumulation; `label` is the display identity used in reports, so the
/// census can register opaque numeric keys while reports show the names
/// from the input network. Keys are inserted as motifs and roles are
/// encountered and never removed. The serializer expects every record of
/// one kind to carry the same key sets and checks that before emitting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Participation {
    pub label: Option<String>,
    /// Times this entity appears in an occurrence of each motif.
    pub motif_counts: BTreeMap<MotifId, u64>,
    pub role_counts: BTreeMap<RoleId, u64>,
    /// Weight sums, populated only for weighted networks.
    pub weighted_motif_counts: BTreeMap<MotifId, f64>,
    pub weighted_role_counts: BTreeMap<RoleId, f64>,
}

impl Participation {
    pub fn new(label: Option<&str>) -> Self {
        Self {
            label: label.map(str::to_owned),
            ..Self::default()
        }
    }
}
