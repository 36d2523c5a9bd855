//! Canonical → literature motif identifiers.
//!
//! The census assigns every motif a canonical integer id derived from its
//! adjacency matrix. The food-web literature instead labels the thirteen
//! connected directed three-node motifs `S1`–`S5` (single links only) and
//! `D1`–`D8` (at least one bidirectional pair), after Stouffer et al. 2007.
//!
//! The table is a process-wide, read-only constant. `NetworkStats::render`
//! takes it as an argument rather than reaching for a global, so callers
//! can substitute their own mapping for other motif orders.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::model::MotifId;

/// Lookup table from canonical motif id to a literature-standard label.
pub type LiteratureTable = BTreeMap<MotifId, &'static str>;

static STOUFFER_IDS: LazyLock<LiteratureTable> = LazyLock::new(|| {
    BTreeMap::from([
        // Single-link motifs, ascending canonical id
        (MotifId(6), "S1"),
        (MotifId(12), "S2"),
        (MotifId(36), "S3"),
        (MotifId(38), "S4"),
        (MotifId(98), "S5"),
        // Double-link motifs, ascending canonical id
        (MotifId(14), "D1"),
        (MotifId(46), "D2"),
        (MotifId(74), "D3"),
        (MotifId(78), "D4"),
        (MotifId(102), "D5"),
        (MotifId(108), "D6"),
        (MotifId(110), "D7"),
        (MotifId(238), "D8"),
    ])
});

/// The fixed Stouffer labels for the connected directed three-node motifs.
pub fn stouffer_ids() -> &'static LiteratureTable {
    &STOUFFER_IDS
}
